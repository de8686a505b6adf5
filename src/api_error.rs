//! The error side of every API response, shared by the server and the
//! function adapter: a status code and a message for the `{"error": ...}`
//! body.

use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::access_granter::AccessGranterError;
use crate::notes_service::NotesError;
use crate::server::UploadError;
use crate::users_service::UsersError;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::Unauthorized | ApiError::InvalidCredentials => 401,
            ApiError::Forbidden => 403,
            ApiError::BadRequest(_) => 400,
            ApiError::Internal => 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody { error: message.into() }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(e: &ApiError) -> Self {
        ErrorBody::new(e.to_string())
    }
}

impl From<NotesError> for ApiError {
    fn from(e: NotesError) -> Self {
        match e {
            NotesError::NotFound(_) => ApiError::NotFound("Note not found".into()),
            NotesError::Store(e) => {
                error!("notes store failure: {e}");
                ApiError::Internal
            },
        }
    }
}

impl From<UsersError> for ApiError {
    fn from(e: UsersError) -> Self {
        match e {
            UsersError::NotFound(_) => ApiError::NotFound("User not found".into()),
            UsersError::Conflict(_) => ApiError::BadRequest("Username already taken".into()),
            UsersError::InvalidUsername(e) => ApiError::BadRequest(format!("Invalid username: {e}")),
            UsersError::BlankPassword => ApiError::BadRequest("Password is required".into()),
            UsersError::Store(e) => {
                error!("users store failure: {e}");
                ApiError::Internal
            },
        }
    }
}

impl From<AccessGranterError> for ApiError {
    fn from(e: AccessGranterError) -> Self {
        match e {
            AccessGranterError::InvalidToken
            | AccessGranterError::SessionExpired => {
                warn!("rejected session: {e}");
                ApiError::Unauthorized
            },
            AccessGranterError::InvalidCredentials => ApiError::InvalidCredentials,
            AccessGranterError::SessionStorage(e) => {
                error!("session storage failure: {e}");
                ApiError::Internal
            },
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        error!("upload failure: {e}");
        ApiError::Internal
    }
}

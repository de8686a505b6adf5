use thiserror::Error;
use crate::session_storage::SessionStorageError;

#[derive(Debug, Error)]
pub enum AccessGranterError {
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session expired")]
    SessionExpired,

    #[error(transparent)]
    SessionStorage(#[from] SessionStorageError),
}

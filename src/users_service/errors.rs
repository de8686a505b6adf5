use thiserror::Error;
use crate::record_store::RecordStoreError;
use crate::username_string::UsernameParseError;

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("user \"{0}\" not found")]
    NotFound(String),

    #[error("user \"{0}\" already exists")]
    Conflict(String),

    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameParseError),

    #[error("password must not be blank")]
    BlankPassword,

    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

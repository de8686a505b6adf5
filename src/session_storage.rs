//! Server-side session table.
//!
//! A session only ever leaves the server as a [`SessionToken`]; the table
//! keeps a hash of the token secret, so a leaked `sessions.json` does not
//! let anyone in.

mod internal;
mod errors;

use async_trait::async_trait;
use time::Duration;
use uuid::Uuid;
use crate::session_token::SessionToken;
use crate::username_string::UsernameString;

pub use errors::*;
pub use internal::{ProductionSessionStorage, SessionStorageImpl};
pub use internal::io_trait::{ProductionSessionStorageIo, SessionStorageIo};
pub use internal::session::Session;

#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Also drops every session that has already expired.
    async fn create_session(
        &self,
        username: &UsernameString,
        lifetime: Duration,
    ) -> Result<(Session, SessionToken), SessionStorageError>;

    /// Expired sessions are still returned, it is up to the caller to
    /// check [`Session::is_expired`].
    async fn find_session(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionStorageError>;

    async fn delete_session(
        &self,
        session_id: Uuid,
    ) -> Result<bool, SessionStorageError>;

    async fn delete_user_sessions(
        &self,
        username: &str,
    ) -> Result<usize, SessionStorageError>;
}

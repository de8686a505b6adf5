use std::path::PathBuf;
use async_trait::async_trait;
use log::{debug, info, trace};
use time::Duration;
use uuid::Uuid;
use crate::record_store::RecordStore;
use crate::session_storage::{SessionStorage, SessionStorageError};
use crate::session_token::SessionToken;
use crate::username_string::UsernameString;
use io_trait::{ProductionSessionStorageIo, SessionStorageIo};
use session::Session;

#[cfg(test)] mod tests;
pub(super) mod io_trait;
pub(super) mod session;

pub type ProductionSessionStorage = SessionStorageImpl<ProductionSessionStorageIo>;

pub struct SessionStorageImpl<Io: SessionStorageIo> {
    sessions: RecordStore<Session>,
    io: Io,
}

impl ProductionSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::new_internal(path, ProductionSessionStorageIo::new())
    }
}

impl<Io: SessionStorageIo> SessionStorageImpl<Io> {
    pub fn new_internal(path: impl Into<PathBuf>, io: Io) -> Self {
        SessionStorageImpl {
            sessions: RecordStore::new(path),
            io,
        }
    }
}

#[async_trait]
impl<Io: SessionStorageIo> SessionStorage for SessionStorageImpl<Io> {
    async fn create_session(
        &self,
        username: &UsernameString,
        lifetime: Duration,
    ) -> Result<(Session, SessionToken), SessionStorageError> {
        let now = self.io.get_time();
        let expires_at = now
            .checked_add(lifetime)
            .ok_or(SessionStorageError::LifetimeOverflow(lifetime))?;
        let token = self.io.generate_token(username);
        let session = Session {
            session_id: self.io.generate_uuid(),
            username: username.clone(),
            secret_hash: token.secret_hash(),
            created_at: now,
            expires_at,
        };
        let new_session = session.clone();
        let dropped = self.sessions
            .update(move |sessions| {
                let before = sessions.len();
                sessions.retain(|s| !s.is_expired(now));
                let dropped = before - sessions.len();
                sessions.push(new_session);
                Ok::<_, SessionStorageError>(dropped)
            })
            .await?;
        if dropped > 0 {
            debug!("dropped {dropped} expired sessions");
        }
        info!(
            "created session {} for user \"{username}\"",
            session.session_id,
        );
        Ok((session, token))
    }

    async fn find_session(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionStorageError> {
        let secret_hash = token.secret_hash();
        let found = self.sessions
            .load()
            .await?
            .into_iter()
            .find(|s| {
                &s.username == token.username() && s.secret_hash == secret_hash
            });
        trace!(
            "session lookup for user \"{}\": {}",
            token.username(),
            if found.is_some() { "found" } else { "not found" },
        );
        Ok(found)
    }

    async fn delete_session(
        &self,
        session_id: Uuid,
    ) -> Result<bool, SessionStorageError> {
        self.sessions
            .update(|sessions| {
                let before = sessions.len();
                sessions.retain(|s| s.session_id != session_id);
                Ok(sessions.len() != before)
            })
            .await
    }

    async fn delete_user_sessions(
        &self,
        username: &str,
    ) -> Result<usize, SessionStorageError> {
        self.sessions
            .update(|sessions| {
                let before = sessions.len();
                sessions.retain(|s| s.username.as_str() != username);
                Ok(before - sessions.len())
            })
            .await
    }
}

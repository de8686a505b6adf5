use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, trace, warn};
use time::{Duration, OffsetDateTime};
use crate::config::app_config::AppConfig;
use crate::data::{PublicUser, User};
use crate::record_store::RecordStore;
use crate::session_storage::{ProductionSessionStorage, SessionStorage};
use crate::session_token::SessionToken;
use crate::username_string::UsernameString;

mod errors;
mod model;
#[cfg(test)] mod tests;

pub use errors::AccessGranterError;
pub use model::{KnownSession, LoginResult, SessionInfo};

#[async_trait]
pub trait AccessGranter: Send + Sync + 'static {
    async fn check_user_access(
        &self,
        cookie_value: &str,
    ) -> Result<SessionInfo, AccessGranterError>;

    async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError>;

    /// Succeeds whether or not the cookie named a session.
    async fn logout_user(
        &self,
        cookie_value: &str,
    ) -> Result<(), AccessGranterError>;

    async fn revoke_user_sessions(
        &self,
        username: &str,
    ) -> Result<(), AccessGranterError>;

    fn is_admin(&self, username: &str) -> bool;

    /// [`Self::check_user_access`] with expired sessions turned into
    /// [`AccessGranterError::SessionExpired`].
    async fn authenticate(
        &self,
        cookie_value: &str,
    ) -> Result<KnownSession, AccessGranterError> {
        match self.check_user_access(cookie_value).await? {
            SessionInfo::Valid(session) => Ok(session),
            SessionInfo::Expired(_) => Err(AccessGranterError::SessionExpired),
        }
    }
}

pub type ProductionAccessGranter = AccessGranterImpl<ProductionSessionStorage>;

pub struct AccessGranterImpl<S: SessionStorage> {
    session_storage: S,
    users: Arc<RecordStore<User>>,
    admins: Vec<String>,
    session_lifetime: Duration,
}

impl ProductionAccessGranter {
    pub fn new(
        app_config: &AppConfig,
        users: Arc<RecordStore<User>>,
    ) -> Self {
        AccessGranterImpl::new_internal(
            ProductionSessionStorage::new(app_config.sessions_path()),
            users,
            app_config.admins.clone(),
            app_config.session_lifetime(),
        )
    }
}

impl<S: SessionStorage> AccessGranterImpl<S> {
    pub fn new_internal(
        session_storage: S,
        users: Arc<RecordStore<User>>,
        admins: Vec<String>,
        session_lifetime: Duration,
    ) -> Self {
        AccessGranterImpl {
            session_storage,
            users,
            admins,
            session_lifetime,
        }
    }
}

#[async_trait]
impl<S: SessionStorage + 'static> AccessGranter for AccessGranterImpl<S> {
    async fn check_user_access(
        &self,
        cookie_value: &str,
    ) -> Result<SessionInfo, AccessGranterError> {
        let token = SessionToken::from_str(cookie_value)
            .map_err(|e| {
                warn!("failed to parse session token: {e}");
                AccessGranterError::InvalidToken
            })?;
        trace!("authenticating user \"{}\"", token.username());
        let Some(session) = self.session_storage.find_session(&token).await? else {
            warn!("no session matches the token of user \"{}\"", token.username());
            return Err(AccessGranterError::InvalidToken);
        };
        let expired = session.is_expired(OffsetDateTime::now_utc());
        let known_session = KnownSession {
            session_id: session.session_id,
            username: session.username,
        };
        Ok(
            if expired {
                debug!(
                    "expired session {} for user \"{}\"",
                    known_session.session_id,
                    known_session.username,
                );
                SessionInfo::Expired(known_session)
            } else {
                trace!("valid session for user \"{}\"", known_session.username);
                SessionInfo::Valid(known_session)
            }
        )
    }

    async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResult, AccessGranterError> {
        debug!("logging user \"{username}\" in");
        let user = self.users
            .load_or_empty()
            .await
            .into_iter()
            .find(|u| u.username == username && u.password == password);
        let Some(user) = user else {
            warn!("invalid credentials for user \"{username}\"");
            return Err(AccessGranterError::InvalidCredentials);
        };
        let session_username = UsernameString::from_str(&user.username)
            .map_err(|e| {
                warn!("stored user \"{username}\" cannot hold a session: {e}");
                AccessGranterError::InvalidCredentials
            })?;
        let (session, token) = self.session_storage
            .create_session(&session_username, self.session_lifetime)
            .await?;
        info!(
            "logged user \"{username}\" in with session {}",
            session.session_id,
        );
        Ok(
            LoginResult {
                token,
                user: PublicUser::from(&user),
                expires_at: session.expires_at,
            }
        )
    }

    async fn logout_user(
        &self,
        cookie_value: &str,
    ) -> Result<(), AccessGranterError> {
        let Ok(token) = SessionToken::from_str(cookie_value) else {
            debug!("logout without a valid token");
            return Ok(());
        };
        let Some(session) = self.session_storage.find_session(&token).await? else {
            warn!(
                "attempting to log out nonexistent session of user \"{}\"",
                token.username(),
            );
            return Ok(());
        };
        let did_exist = self.session_storage
            .delete_session(session.session_id)
            .await?;
        if did_exist {
            info!(
                "session {} of user \"{}\" deleted",
                session.session_id,
                session.username,
            );
        }
        Ok(())
    }

    async fn revoke_user_sessions(
        &self,
        username: &str,
    ) -> Result<(), AccessGranterError> {
        let count = self.session_storage
            .delete_user_sessions(username)
            .await?;
        info!("revoked {count} sessions of user \"{username}\"");
        Ok(())
    }

    fn is_admin(&self, username: &str) -> bool {
        self.admins.iter().any(|admin| admin == username)
    }
}

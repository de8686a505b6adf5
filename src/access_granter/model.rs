use time::OffsetDateTime;
use uuid::Uuid;
use crate::data::PublicUser;
use crate::session_token::SessionToken;
use crate::username_string::UsernameString;

#[derive(Debug)]
pub struct LoginResult {
    pub token: SessionToken,
    pub user: PublicUser,
    pub expires_at: OffsetDateTime,
}

#[derive(Debug)]
pub enum SessionInfo {
    Valid(KnownSession),
    Expired(KnownSession),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KnownSession {
    pub session_id: Uuid,
    pub username: UsernameString,
}

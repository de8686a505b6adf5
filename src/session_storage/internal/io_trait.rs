use crate::rng::make_uuid;
use crate::session_token::SessionToken;
use crate::username_string::UsernameString;
use time::OffsetDateTime;
use uuid::Uuid;

pub trait SessionStorageIo: Send + Sync + 'static {
    fn generate_token(&self, username: &UsernameString) -> SessionToken;

    fn get_time(&self) -> OffsetDateTime;

    fn generate_uuid(&self) -> Uuid;
}

#[derive(Debug, Default)]
pub struct ProductionSessionStorageIo;

impl ProductionSessionStorageIo {
    pub fn new() -> Self {
        ProductionSessionStorageIo
    }
}

impl SessionStorageIo for ProductionSessionStorageIo {
    fn generate_token(&self, username: &UsernameString) -> SessionToken {
        SessionToken::generate(username.clone(), &mut rand::rng())
    }

    fn get_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}

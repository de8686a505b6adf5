use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;
use crate::lib_constants::SESSION_SECRET_SIZE;
use crate::rng::make_secret;
use crate::username_string::{UsernameParseError, UsernameString};

pub const TOKEN_SEPARATOR: char = ':';

/// The `authToken` cookie value: `<username>:<hex secret>`.
///
/// The username half is only a claim. A token authenticates nobody until
/// its secret is matched against a stored session of the same user.
#[derive(Clone, Eq, PartialEq)]
pub struct SessionToken {
    username: UsernameString,
    secret: Vec<u8>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionTokenParseError {
    #[error("no separator in the token")]
    MissingSeparator,

    #[error("invalid username in the token: {0}")]
    Username(#[from] UsernameParseError),

    #[error("token secret is not hex: {0}")]
    Secret(#[from] hex::FromHexError),

    #[error("token secret is empty")]
    EmptySecret,
}

impl SessionToken {
    pub fn generate(username: UsernameString, rng: &mut impl RngCore) -> Self {
        SessionToken {
            username,
            secret: make_secret(rng, SESSION_SECRET_SIZE),
        }
    }

    pub fn username(&self) -> &UsernameString {
        &self.username
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// What the session table stores instead of the secret itself.
    pub fn secret_hash(&self) -> String {
        hash_secret(&self.secret)
    }
}

pub fn hash_secret(secret: &[u8]) -> String {
    hex::encode(Sha256::digest(secret))
}

impl Display for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.username, hex::encode(&self.secret))
    }
}

impl Debug for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl FromStr for SessionToken {
    type Err = SessionTokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, secret) = s.split_once(TOKEN_SEPARATOR)
            .ok_or(SessionTokenParseError::MissingSeparator)?;
        let username = UsernameString::from_str(username)?;
        let secret = hex::decode(secret)?;
        if secret.is_empty() {
            return Err(SessionTokenParseError::EmptySecret);
        }
        Ok(SessionToken { username, secret })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;

    fn alice() -> UsernameString {
        UsernameString::from_str("alice").unwrap()
    }

    #[test]
    fn generated_token_format() {
        let token = SessionToken::generate(alice(), &mut StdRng::seed_from_u64(1));
        let serialized = token.to_string();
        let (username, secret) = serialized.split_once(':').unwrap();
        assert_eq!(username, "alice");
        assert_eq!(secret.len(), SESSION_SECRET_SIZE * 2);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(SessionToken::from_str(&serialized), Ok(token));
    }

    #[test]
    fn secrets_differ_between_tokens() {
        let mut rng = StdRng::seed_from_u64(2);
        let first = SessionToken::generate(alice(), &mut rng);
        let second = SessionToken::generate(alice(), &mut rng);
        assert_ne!(first.secret(), second.secret());
        assert_ne!(first.secret_hash(), second.secret_hash());
    }

    #[test]
    fn splits_on_the_first_separator_only() {
        assert!(matches!(
            SessionToken::from_str("alice:ab:cd"),
            Err(SessionTokenParseError::Secret(_)),
        ));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(
            SessionToken::from_str("alice"),
            Err(SessionTokenParseError::MissingSeparator),
        );
        assert_eq!(
            SessionToken::from_str(":abcd"),
            Err(SessionTokenParseError::Username(UsernameParseError::Blank)),
        );
        assert_eq!(
            SessionToken::from_str("alice:"),
            Err(SessionTokenParseError::EmptySecret),
        );
        assert!(matches!(
            SessionToken::from_str("alice:not-hex"),
            Err(SessionTokenParseError::Secret(_)),
        ));
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let token = SessionToken::generate(alice(), &mut StdRng::seed_from_u64(3));
        let debug = format!("{token:?}");
        assert!(!debug.contains(&hex::encode(token.secret())));
    }

    #[test]
    fn secret_hash_is_sha256_hex() {
        assert_eq!(
            hash_secret(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
    }
}

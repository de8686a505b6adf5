use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;
use crate::session_token::TOKEN_SEPARATOR;

/// A username that can be embedded into a session token.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UsernameString(String);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum UsernameParseError {
    #[error("username is blank")]
    Blank,

    #[error("username contains a forbidden character {0:?}")]
    ForbiddenCharacter(char),
}

impl UsernameString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for UsernameString {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(UsernameParseError::Blank);
        }
        if let Some(c) = s.chars().find(|c| *c == TOKEN_SEPARATOR || c.is_control()) {
            return Err(UsernameParseError::ForbiddenCharacter(c));
        }
        Ok(UsernameString(s.to_owned()))
    }
}

impl Deref for UsernameString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl AsRef<str> for UsernameString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UsernameString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for UsernameString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for UsernameString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UsernameString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = UsernameString;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("string containing a valid username")
            }

            fn visit_str<E>(self, v: &str) -> Result<UsernameString, E>
            where
                E: Error
            {
                UsernameString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_with_spaces() {
        let username = UsernameString::from_str("Andreas Rittsel").unwrap();
        assert_eq!(username.as_str(), "Andreas Rittsel");
    }

    #[test]
    fn rejects_blank_and_separator() {
        assert_eq!(UsernameString::from_str("  "), Err(UsernameParseError::Blank));
        assert_eq!(
            UsernameString::from_str("ali:ce"),
            Err(UsernameParseError::ForbiddenCharacter(':')),
        );
        assert_eq!(
            UsernameString::from_str("bob\n"),
            Err(UsernameParseError::ForbiddenCharacter('\n')),
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: UsernameString = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(ok.as_str(), "alice");
        assert!(serde_json::from_str::<UsernameString>("\"a:b\"").is_err());
    }
}

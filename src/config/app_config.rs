use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::lib_constants::{DEFAULT_ADMIN, DEFAULT_DATA_DIR, DEFAULT_PUBLIC_DIR, DEFAULT_SESSION_LIFETIME_SECS, NOTES_FILE_PATH, SESSIONS_FILE_PATH, UPLOADS_DIRECTORY_PATH, USERS_FILE_PATH};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Holds `notes.json`, `users.json` and `sessions.json`.
    pub data_directory: PathBuf,

    /// Served as static files; uploads land in its `uploads` subdirectory.
    pub public_directory: PathBuf,

    pub admins: Vec<String>,

    /// Session cookies are only sent over https when set.
    pub production: bool,

    /// Seconds.
    pub session_lifetime: u64,
}

impl AppConfig {
    pub fn notes_path(&self) -> PathBuf {
        self.data_directory.join(NOTES_FILE_PATH)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_directory.join(USERS_FILE_PATH)
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.data_directory.join(SESSIONS_FILE_PATH)
    }

    pub fn upload_directory(&self) -> PathBuf {
        self.public_directory.join(UPLOADS_DIRECTORY_PATH)
    }

    pub fn session_lifetime(&self) -> time::Duration {
        time::Duration::seconds(
            i64::try_from(self.session_lifetime).unwrap_or(i64::MAX)
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: DEFAULT_DATA_DIR.into(),
            public_directory: DEFAULT_PUBLIC_DIR.into(),
            admins: vec![DEFAULT_ADMIN.to_owned()],
            production: false,
            session_lifetime: DEFAULT_SESSION_LIFETIME_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfig::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }

    #[test]
    fn store_paths_are_under_the_data_directory() {
        let config = AppConfig {
            data_directory: "/var/notesd".into(),
            public_directory: "/srv/notesd".into(),
            ..Default::default()
        };
        assert_eq!(config.notes_path(), PathBuf::from("/var/notesd/notes.json"));
        assert_eq!(config.users_path(), PathBuf::from("/var/notesd/users.json"));
        assert_eq!(config.upload_directory(), PathBuf::from("/srv/notesd/uploads"));
        assert_eq!(config.session_lifetime(), time::Duration::hours(24));
    }
}

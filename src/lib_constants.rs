// relative to the data directory
pub const NOTES_FILE_PATH: &str = "notes.json";
pub const USERS_FILE_PATH: &str = "users.json";
pub const SESSIONS_FILE_PATH: &str = "sessions.json";

// relative to the public directory
pub const UPLOADS_DIRECTORY_PATH: &str = "uploads";
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

pub const API_PREFIX: &str = "/api";
pub const FUNCTION_PATH_PREFIX: &str = "/.netlify/functions/api";
pub const AUTH_COOKIE_NAME: &str = "authToken";

pub const TMP_FILENAME_INFIX: &str = ".tmp.";

pub const SESSION_SECRET_SIZE: usize = 64;
pub const DEFAULT_SESSION_LIFETIME_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_ADMIN: &str = "admin";
pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

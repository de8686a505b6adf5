pub mod config;
pub mod data;
pub mod util;
mod lib_constants;
pub mod bin_constants;
pub mod rng;
pub mod logging;
pub mod username_string;
pub mod record_store;
pub mod session_token;
pub mod session_cookie;
pub mod session_storage;
pub mod access_granter;
pub mod notes_service;
pub mod users_service;
pub mod api_error;
pub mod app;
pub mod server;
pub mod function;

pub use lib_constants::{API_PREFIX, AUTH_COOKIE_NAME, FUNCTION_PATH_PREFIX, UPLOADS_URL_PREFIX};

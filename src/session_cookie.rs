use rocket::http::{Cookie, SameSite};
use time::Duration;
use crate::lib_constants::AUTH_COOKIE_NAME;
use crate::session_token::SessionToken;

pub fn session_cookie(
    token: &SessionToken,
    lifetime: Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(lifetime)
        .secure(secure)
        .build()
}

/// Overwrites the session cookie on the client with one that is already
/// expired.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .secure(secure)
        .build()
}

/// Finds the session cookie value in a raw `Cookie` request header.
pub fn find_session_cookie(cookie_header: &str) -> Option<String> {
    Cookie::split_parse(cookie_header)
        .filter_map(Result::ok)
        .find(|c| c.name() == AUTH_COOKIE_NAME)
        .map(|c| c.value().to_owned())
}

mod authentication_guard;
mod errors;
mod model;
mod notes;
mod users;

use log::debug;
use rocket::http::CookieJar;
use rocket::serde::json::Json;
use rocket::{get, post, routes, Build, Rocket, Route, State};
use crate::api_error::ApiError;
use crate::app::NotesApp;
use crate::data::{LoginRequest, LoginResponse, PublicUser, SuccessResponse};
use crate::lib_constants::{API_PREFIX, AUTH_COOKIE_NAME};
use crate::session_cookie::{removal_cookie, session_cookie};
use authentication_guard::Authenticated;

#[post("/login", data = "<login>")]
async fn login(
    login: Json<LoginRequest>,
    app: &State<NotesApp>,
    cookies: &CookieJar<'_>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = app.access_granter
        .login_user(&login.username, &login.password)
        .await?;
    debug!(
        "session of user \"{}\" valid until {}",
        result.user.username,
        result.expires_at,
    );
    cookies.add(
        session_cookie(
            &result.token,
            app.config.session_lifetime(),
            app.config.production,
        )
    );
    Ok(Json(result.user.into()))
}

#[post("/logout")]
async fn logout(
    app: &State<NotesApp>,
    cookies: &CookieJar<'_>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let token = cookies
        .get(AUTH_COOKIE_NAME)
        .map(|c| c.value().to_owned());
    cookies.add(removal_cookie(app.config.production));
    if let Some(token) = token {
        app.access_granter.logout_user(&token).await?;
    } else {
        debug!("logout without a session cookie");
    }
    Ok(Json(SuccessResponse { success: true }))
}

#[get("/check-auth")]
async fn check_auth(
    session: Authenticated,
    app: &State<NotesApp>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(app.users.check_auth(&session.0.username).await?))
}

fn api_routes() -> Vec<Route> {
    routes![
        login,
        logout,
        check_auth,
    ]
}

pub trait ApiRocketBuildExt {
    fn install_notes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notes_api(self) -> Self {
        self
            .mount(API_PREFIX, api_routes())
            .mount(API_PREFIX, notes::notes_routes())
            .mount(API_PREFIX, users::users_routes())
    }
}

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{catch, catchers, Build, Request, Rocket};
use crate::api_error::{ApiError, ErrorBody};

#[catch(400)]
fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request body"))
}

#[catch(401)]
fn unauthorized() -> Json<ErrorBody> {
    Json(ErrorBody::from(&ApiError::Unauthorized))
}

#[catch(403)]
fn forbidden() -> Json<ErrorBody> {
    Json(ErrorBody::from(&ApiError::Forbidden))
}

#[catch(404)]
fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Not found"))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request body"))
}

#[catch(500)]
fn internal() -> Json<ErrorBody> {
    Json(ErrorBody::from(&ApiError::Internal))
}

#[catch(default)]
fn default(status: Status, _request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody::new(status.reason_lossy()))
}

pub trait CatchersRocketBuildExt {
    fn install_json_catchers(self) -> Self;
}

impl CatchersRocketBuildExt for Rocket<Build> {
    fn install_json_catchers(self) -> Self {
        self.register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                not_found,
                unprocessable,
                internal,
                default,
            ],
        )
    }
}

use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use crate::api_error::{ApiError, ErrorBody};

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = Status::from_code(self.status_code())
            .unwrap_or(Status::InternalServerError);
        status::Custom(status, Json(ErrorBody::from(&self))).respond_to(request)
    }
}

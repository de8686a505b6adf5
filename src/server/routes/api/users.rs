use log::info;
use rocket::form::Form;
use rocket::http::RawStr;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Route, State};
use crate::api_error::ApiError;
use crate::app::NotesApp;
use crate::data::PublicUser;
use crate::lib_constants::API_PREFIX;
use crate::server::uploads::UploadStore;
use super::authentication_guard::{Admin, Authenticated};
use super::model::{CreateUserForm, UserUpdateForm};

#[get("/users")]
async fn list_users(
    _admin: Admin,
    app: &State<NotesApp>,
) -> Json<Vec<PublicUser>> {
    Json(app.users.list_users().await)
}

#[post("/users", data = "<form>")]
async fn create_user(
    _admin: Admin,
    form: Form<CreateUserForm<'_>>,
    app: &State<NotesApp>,
    uploads: &State<UploadStore>,
) -> Result<status::Created<Json<PublicUser>>, ApiError> {
    let mut form = form.into_inner();
    let upload = uploads
        .store(&form.username, form.profile_image.as_mut())
        .await?;
    let result = app.users
        .create_user(
            &form.username,
            &form.password,
            upload.as_ref().map(|u| u.url.clone()),
        )
        .await;
    let user = uploads.discard_on_error(upload.as_ref(), result).await?;
    let location = format!(
        "{API_PREFIX}/users/{}",
        RawStr::new(&user.username).percent_encode(),
    );
    Ok(status::Created::new(location).body(Json(user)))
}

#[put("/users/profile", data = "<form>")]
async fn update_own_profile(
    session: Authenticated,
    form: Form<UserUpdateForm<'_>>,
    app: &State<NotesApp>,
    uploads: &State<UploadStore>,
) -> Result<Json<PublicUser>, ApiError> {
    let username = &session.0.username;
    let mut form = form.into_inner();
    let upload = uploads
        .store(username.as_str(), form.profile_image.as_mut())
        .await?;
    let result = app.users
        .update_own_profile(
            username,
            form.changes(upload.as_ref().map(|u| u.url.clone())),
        )
        .await;
    Ok(Json(uploads.discard_on_error(upload.as_ref(), result).await?))
}

#[put("/users/<username>", data = "<form>")]
async fn update_user(
    username: &str,
    _admin: Admin,
    form: Form<UserUpdateForm<'_>>,
    app: &State<NotesApp>,
    uploads: &State<UploadStore>,
) -> Result<Json<PublicUser>, ApiError> {
    let mut form = form.into_inner();
    let upload = uploads
        .store(username, form.profile_image.as_mut())
        .await?;
    let result = app.users
        .update_user(
            username,
            form.changes(upload.as_ref().map(|u| u.url.clone())),
        )
        .await;
    Ok(Json(uploads.discard_on_error(upload.as_ref(), result).await?))
}

#[delete("/users/<username>")]
async fn delete_user(
    username: &str,
    admin: Admin,
    app: &State<NotesApp>,
) -> Result<Status, ApiError> {
    app.users.delete_user(username).await?;
    app.access_granter.revoke_user_sessions(username).await?;
    info!("user \"{username}\" deleted by \"{}\"", admin.0.username);
    Ok(Status::NoContent)
}

pub(super) fn users_routes() -> Vec<Route> {
    routes![
        list_users,
        create_user,
        update_own_profile,
        update_user,
        delete_user,
    ]
}

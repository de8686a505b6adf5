use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Route, State};
use crate::api_error::ApiError;
use crate::app::NotesApp;
use crate::data::{NewNote, Note, NoteId, NoteUpdate};
use crate::lib_constants::API_PREFIX;
use super::authentication_guard::Authenticated;

#[get("/notes")]
async fn list_notes(
    _session: Authenticated,
    app: &State<NotesApp>,
) -> Json<Vec<Note>> {
    Json(app.notes.list_notes().await)
}

#[get("/notes/<id>")]
async fn get_note(
    id: NoteId,
    _session: Authenticated,
    app: &State<NotesApp>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(app.notes.get_note(id).await?))
}

#[post("/notes", data = "<new_note>")]
async fn create_note(
    _session: Authenticated,
    new_note: Json<NewNote>,
    app: &State<NotesApp>,
) -> Result<status::Created<Json<Note>>, ApiError> {
    let note = app.notes.create_note(new_note.into_inner()).await?;
    Ok(
        status::Created::new(format!("{API_PREFIX}/notes/{}", note.id))
            .body(Json(note))
    )
}

#[put("/notes/<id>", data = "<update>")]
async fn update_note(
    id: NoteId,
    _session: Authenticated,
    update: Json<NoteUpdate>,
    app: &State<NotesApp>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(app.notes.update_note(id, update.into_inner()).await?))
}

#[delete("/notes/<id>")]
async fn delete_note(
    id: NoteId,
    _session: Authenticated,
    app: &State<NotesApp>,
) -> Result<Status, ApiError> {
    app.notes.delete_note(id).await?;
    Ok(Status::NoContent)
}

pub(super) fn notes_routes() -> Vec<Route> {
    routes![
        list_notes,
        get_note,
        create_note,
        update_note,
        delete_note,
    ]
}

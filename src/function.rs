//! The serverless rendition of the API: one event in, one response out,
//! over the same services the server uses. Only the session and notes
//! routes exist here.

mod model;

use std::collections::HashMap;
use log::{debug, trace, warn};
use rocket::http::Cookie;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::access_granter::{AccessGranterError, KnownSession};
use crate::api_error::{ApiError, ErrorBody};
use crate::app::NotesApp;
use crate::data::{LoginRequest, LoginResponse, NewNote, NoteId, NoteUpdate, SuccessResponse};
use crate::lib_constants::{API_PREFIX, FUNCTION_PATH_PREFIX};
use crate::notes_service::NotesError;
use crate::session_cookie::{find_session_cookie, removal_cookie, session_cookie};
use crate::users_service::UsersError;

pub use model::{FunctionEvent, FunctionResponse};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunctionRoute {
    Login,
    Logout,
    CheckAuth,
    ListNotes,
    CreateNote,
    GetNote(NoteId),
    UpdateNote(NoteId),
    DeleteNote(NoteId),
    /// A note path whose id is not a number. Still needs a session.
    MalformedNoteId,
}

impl FunctionRoute {
    pub fn resolve(method: &str, path: &str) -> Option<Self> {
        let path = strip_function_prefix(path);
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let method = method.to_ascii_uppercase();
        let route = match (method.as_str(), path) {
            ("POST", "/login") => FunctionRoute::Login,
            ("POST", "/logout") => FunctionRoute::Logout,
            ("GET", "/check-auth") => FunctionRoute::CheckAuth,
            ("GET", "/notes") => FunctionRoute::ListNotes,
            ("POST", "/notes") => FunctionRoute::CreateNote,
            (method, path) => {
                let id = path.strip_prefix("/notes/")?.parse::<NoteId>();
                match (method, id) {
                    ("GET", Ok(id)) => FunctionRoute::GetNote(id),
                    ("PUT", Ok(id)) => FunctionRoute::UpdateNote(id),
                    ("DELETE", Ok(id)) => FunctionRoute::DeleteNote(id),
                    ("GET" | "PUT" | "DELETE", Err(_)) => FunctionRoute::MalformedNoteId,
                    _ => return None,
                }
            },
        };
        Some(route)
    }
}

fn strip_function_prefix(path: &str) -> &str {
    path.strip_prefix(FUNCTION_PATH_PREFIX)
        .or_else(|| path.strip_prefix(API_PREFIX))
        .unwrap_or(path)
}

pub async fn handle_event(app: &NotesApp, event: &FunctionEvent) -> FunctionResponse {
    debug!("{} {}", event.http_method, event.path);
    let Some(route) = FunctionRoute::resolve(&event.http_method, &event.path) else {
        debug!("no route for {} {}", event.http_method, event.path);
        return error_response(404, ErrorBody::new("Not found"));
    };
    trace!("resolved to {route:?}");
    match dispatch(app, route, event).await {
        Ok(response) => response,
        Err(FunctionError::Api(e)) => error_response(e.status_code(), ErrorBody::from(&e)),
        Err(FunctionError::Body(e)) => {
            warn!("malformed request body: {e}");
            error_response(400, ErrorBody::new("Invalid request body"))
        },
    }
}

enum FunctionError {
    Api(ApiError),
    Body(serde_json::Error),
}

impl From<ApiError> for FunctionError {
    fn from(e: ApiError) -> Self {
        FunctionError::Api(e)
    }
}

impl From<AccessGranterError> for FunctionError {
    fn from(e: AccessGranterError) -> Self {
        FunctionError::Api(e.into())
    }
}

impl From<NotesError> for FunctionError {
    fn from(e: NotesError) -> Self {
        FunctionError::Api(e.into())
    }
}

impl From<UsersError> for FunctionError {
    fn from(e: UsersError) -> Self {
        FunctionError::Api(e.into())
    }
}

async fn dispatch(
    app: &NotesApp,
    route: FunctionRoute,
    event: &FunctionEvent,
) -> Result<FunctionResponse, FunctionError> {
    let cookie = event.header("cookie").and_then(find_session_cookie);
    match route {
        FunctionRoute::Login => {
            let login: LoginRequest = parse_body(event)?;
            let result = app.access_granter
                .login_user(&login.username, &login.password)
                .await?;
            let cookie = session_cookie(
                &result.token,
                app.config.session_lifetime(),
                app.config.production,
            );
            Ok(
                json_response(200, &LoginResponse::from(result.user))
                    .with_cookie(cookie)
            )
        },
        FunctionRoute::Logout => {
            if let Some(cookie) = cookie {
                app.access_granter.logout_user(&cookie).await?;
            }
            Ok(
                json_response(200, &SuccessResponse { success: true })
                    .with_cookie(removal_cookie(app.config.production))
            )
        },
        FunctionRoute::CheckAuth => {
            let session = authenticate(app, cookie.as_deref()).await?;
            Ok(json_response(200, &app.users.check_auth(&session.username).await?))
        },
        FunctionRoute::ListNotes => {
            authenticate(app, cookie.as_deref()).await?;
            Ok(json_response(200, &app.notes.list_notes().await))
        },
        FunctionRoute::CreateNote => {
            authenticate(app, cookie.as_deref()).await?;
            let new_note: NewNote = parse_body(event)?;
            let note = app.notes.create_note(new_note).await?;
            Ok(
                json_response(201, &note)
                    .with_header("Location", format!("{API_PREFIX}/notes/{}", note.id))
            )
        },
        FunctionRoute::GetNote(id) => {
            authenticate(app, cookie.as_deref()).await?;
            Ok(json_response(200, &app.notes.get_note(id).await?))
        },
        FunctionRoute::UpdateNote(id) => {
            authenticate(app, cookie.as_deref()).await?;
            let update: NoteUpdate = parse_body(event)?;
            Ok(json_response(200, &app.notes.update_note(id, update).await?))
        },
        FunctionRoute::DeleteNote(id) => {
            authenticate(app, cookie.as_deref()).await?;
            app.notes.delete_note(id).await?;
            Ok(
                FunctionResponse {
                    status_code: 204,
                    headers: HashMap::new(),
                    body: None,
                }
            )
        },
        FunctionRoute::MalformedNoteId => {
            authenticate(app, cookie.as_deref()).await?;
            Err(ApiError::NotFound("Not found".into()).into())
        },
    }
}

async fn authenticate(
    app: &NotesApp,
    cookie: Option<&str>,
) -> Result<KnownSession, ApiError> {
    let cookie = cookie.ok_or(ApiError::Unauthorized)?;
    Ok(app.access_granter.authenticate(cookie).await?)
}

fn parse_body<T: DeserializeOwned>(event: &FunctionEvent) -> Result<T, FunctionError> {
    serde_json::from_str(event.body.as_deref().unwrap_or_default())
        .map_err(FunctionError::Body)
}

fn json_response(status_code: u16, body: &impl Serialize) -> FunctionResponse {
    match serde_json::to_string(body) {
        Ok(body) => FunctionResponse {
            status_code,
            headers: HashMap::from([
                ("Content-Type".to_owned(), "application/json".to_owned()),
            ]),
            body: Some(body),
        },
        Err(e) => {
            log::error!("failed to serialize the response: {e}");
            FunctionResponse {
                status_code: 500,
                headers: HashMap::new(),
                body: None,
            }
        },
    }
}

fn error_response(status_code: u16, body: ErrorBody) -> FunctionResponse {
    json_response(status_code, &body)
}

impl FunctionResponse {
    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_owned(), value.into());
        self
    }

    fn with_cookie(self, cookie: Cookie<'static>) -> Self {
        self.with_header("Set-Cookie", cookie.to_string())
    }
}

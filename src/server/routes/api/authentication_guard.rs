use async_trait::async_trait;
use log::{debug, warn};
use rocket::{Request, State};
use rocket::http::Status;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use crate::access_granter::{AccessGranterError, KnownSession, SessionInfo};
use crate::app::NotesApp;
use crate::lib_constants::AUTH_COOKIE_NAME;

#[derive(Debug)]
pub struct Authenticated(pub KnownSession);

/// An authenticated user from the configured admin list.
#[derive(Debug)]
pub struct Admin(pub KnownSession);

#[derive(Debug)]
pub enum MaybeAuthenticated {
    Valid(KnownSession),
    Expired,
    Invalid,
    Unauthenticated,
}

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match try_outcome!(request.guard::<MaybeAuthenticated>().await) {
            MaybeAuthenticated::Valid(session) => Outcome::Success(Authenticated(session)),
            MaybeAuthenticated::Expired => Outcome::Error((Status::Unauthorized, ())),
            MaybeAuthenticated::Invalid => Outcome::Error((Status::Unauthorized, ())),
            MaybeAuthenticated::Unauthenticated => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Authenticated(session) = try_outcome!(request.guard::<Authenticated>().await);
        let app = try_outcome!(request.guard::<&State<NotesApp>>().await);
        if app.access_granter.is_admin(session.username.as_str()) {
            Outcome::Success(Admin(session))
        } else {
            warn!("user \"{}\" is not an admin", session.username);
            Outcome::Error((Status::Forbidden, ()))
        }
    }
}

#[async_trait]
impl<'r> FromRequest<'r> for MaybeAuthenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(cookie) = request.cookies().get(AUTH_COOKIE_NAME) else {
            return Outcome::Success(MaybeAuthenticated::Unauthenticated);
        };
        let app = try_outcome!(request.guard::<&State<NotesApp>>().await);
        match app.access_granter.check_user_access(cookie.value()).await {
            Ok(SessionInfo::Valid(info)) => Outcome::Success(MaybeAuthenticated::Valid(info)),
            Ok(SessionInfo::Expired(info)) => {
                debug!("session of user \"{}\" has expired", info.username);
                Outcome::Success(MaybeAuthenticated::Expired)
            },
            Err(e) => match e {
                AccessGranterError::InvalidToken |
                AccessGranterError::InvalidCredentials |
                AccessGranterError::SessionExpired
                => Outcome::Success(MaybeAuthenticated::Invalid),

                AccessGranterError::SessionStorage(e) => {
                    log::error!("session lookup failed: {e}");
                    Outcome::Error((Status::InternalServerError, ()))
                },
            }
        }
    }
}

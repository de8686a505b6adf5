//! The HTTP face of the app: a Rocket instance configured by
//! [`AppSetupFairing`].

mod app_setup;
mod routes;
mod uploads;

use rocket::figment::Figment;
use rocket::{Build, Rocket};

pub use app_setup::AppSetupFairing;
pub use uploads::{StoredUpload, UploadError, UploadStore};

pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).attach(AppSetupFairing)
}

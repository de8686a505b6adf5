use std::path::Path;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};

pub trait WebRocketBuildExt {
    fn install_notes_web(self, public_directory: &Path) -> Self;
}

impl WebRocketBuildExt for Rocket<Build> {
    /// The front end and the uploaded profile images.
    fn install_notes_web(self, public_directory: &Path) -> Self {
        self.mount("/", FileServer::from(public_directory))
    }
}

use async_trait::async_trait;
use log::{error, info};
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use crate::app::{create_directory, NotesApp};
use crate::config::app_config::AppConfig;
use crate::server::routes::{ApiRocketBuildExt, CatchersRocketBuildExt, WebRocketBuildExt};
use crate::server::uploads::UploadStore;

pub struct AppSetupFairing;

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let app_config = rocket.figment().extract::<AppConfig>();
        let app_config = ok_or_bail!(
            rocket,
            app_config,
            |e| error!("invalid configuration: {e}")
        );

        let upload_directory = app_config.upload_directory();
        ok_or_bail!(
            rocket,
            create_directory(&upload_directory).await,
            |e| error!("upload storage initialization failed: {e}")
        );

        let app = ok_or_bail!(
            rocket,
            NotesApp::new(app_config.clone()).await,
            |e| error!("app initialization failed: {e}")
        );
        info!(
            "serving static files from \"{}\"",
            app_config.public_directory.display(),
        );

        Ok(
            rocket
                .manage(app)
                .manage(UploadStore::new(upload_directory))
                .install_notes_api()
                .install_notes_web(&app_config.public_directory)
                .install_json_catchers()
        )
    }
}

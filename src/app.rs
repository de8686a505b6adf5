//! Everything a request handler needs, built once from the configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, info};
use thiserror::Error;
use crate::access_granter::{AccessGranter, ProductionAccessGranter};
use crate::config::app_config::AppConfig;
use crate::notes_service::NotesService;
use crate::record_store::RecordStore;
use crate::users_service::UsersService;

#[derive(Debug, Error)]
pub enum AppSetupError {
    #[error("failed to create directory \"{path}\": {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub struct NotesApp {
    pub config: AppConfig,
    pub notes: NotesService,
    pub users: UsersService,
    pub access_granter: Box<dyn AccessGranter>,
}

impl NotesApp {
    pub async fn new(config: AppConfig) -> Result<Self, AppSetupError> {
        create_directory(&config.data_directory).await?;
        let users = Arc::new(RecordStore::new(config.users_path()));
        let access_granter: Box<dyn AccessGranter> = Box::new(
            ProductionAccessGranter::new(&config, users.clone())
        );
        info!(
            "serving data from \"{}\"",
            config.data_directory.display(),
        );
        Ok(
            NotesApp {
                notes: NotesService::new(config.notes_path()),
                users: UsersService::new(users),
                access_granter,
                config,
            }
        )
    }
}

pub async fn create_directory(path: &Path) -> Result<(), AppSetupError> {
    debug!("ensuring directory \"{}\" exists", path.display());
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| AppSetupError::CreateDirectory {
            path: path.to_owned(),
            source: e,
        })
}

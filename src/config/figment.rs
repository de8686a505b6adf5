use std::path::Path;
use rocket::figment::Figment;
use rocket::figment::providers::{Env, Format, Serialized, Toml};
use crate::bin_constants::{APP_CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE, DEFAULT_PORT};
use crate::config::app_config::AppConfig;

pub trait FigmentExt {
    /// An explicitly given config file must exist, the default one may be
    /// missing.
    fn setup_app_config(
        self,
        config_file: Option<&Path>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: Option<&Path>) -> Figment {
        let figment = self
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Serialized::default(rocket::Config::PORT, DEFAULT_PORT));
        let figment = match config_file {
            Some(config_file) => figment.merge(Toml::file_exact(config_file)),
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };
        figment
            .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
            .merge(Env::raw().only(&["port"]).global())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use super::*;

    #[test]
    fn file_values_override_defaults() -> Result<(), Box<dyn Error>> {
        let dir = TempDir::new()?;
        let file = dir.child("notesd.toml");
        file.write_str(
            "admins = [\"root\", \"Andreas Rittsel\"]\nproduction = true\nport = 3000\n"
        )?;
        let figment = Figment::from(rocket::Config::default())
            .setup_app_config(Some(file.path()));
        let config: AppConfig = figment.extract()?;
        assert_eq!(config.admins, vec!["root".to_owned(), "Andreas Rittsel".to_owned()]);
        assert!(config.production);
        assert_eq!(config.session_lifetime, AppConfig::default().session_lifetime);
        let port: u16 = figment.extract_inner(rocket::Config::PORT)?;
        assert_eq!(port, 3000);
        Ok(())
    }
}

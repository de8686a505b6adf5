mod cli;

use crate::cli::CliConfig;
use clap::{crate_name, Parser};
use log::info;
use notesd::config::figment::FigmentExt;
use notesd::error_exit;
use notesd::logging::{init_daemon_logging, UseSyslog};
use notesd::server::build_rocket;
use rocket::figment::Figment;

fn main() {
    let cli_config = CliConfig::parse();
    init_daemon_logging(UseSyslog::from(cli_config.syslog));

    info!("{} starting up", crate_name!());

    if let Some(ref config_file) = cli_config.config_file
        && !config_file.exists()
    {
        error_exit!(
            "configuration file at {} does not exist",
            config_file.display(),
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file.as_deref());

    let result = rocket::execute(build_rocket(figment).launch());
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}

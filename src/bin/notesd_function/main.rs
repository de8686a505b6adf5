mod cli;

use std::io::Write;
use crate::cli::CliConfig;
use clap::Parser;
use log::debug;
use notesd::app::NotesApp;
use notesd::config::app_config::AppConfig;
use notesd::config::figment::FigmentExt;
use notesd::error_exit;
use notesd::function::{handle_event, FunctionEvent};
use notesd::logging::init_tool_logging;
use rocket::figment::Figment;

#[tokio::main]
async fn main() {
    init_tool_logging();
    let cli_config = CliConfig::parse();

    if let Some(ref config_file) = cli_config.config_file
        && !config_file.exists()
    {
        error_exit!(
            "configuration file at {} does not exist",
            config_file.display(),
        )
    }
    let app_config: AppConfig = Figment::new()
        .setup_app_config(cli_config.config_file.as_deref())
        .extract()
        .unwrap_or_else(|e| error_exit!("invalid configuration: {e}"));
    let app = NotesApp::new(app_config)
        .await
        .unwrap_or_else(|e| error_exit!("app initialization failed: {e}"));

    let event: FunctionEvent = serde_json::from_reader(std::io::stdin().lock())
        .unwrap_or_else(|e| error_exit!("failed to read the event: {e}"));
    let response = handle_event(&app, &event).await;
    debug!("responding with status {}", response.status_code);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)
        .unwrap_or_else(|e| error_exit!("failed to write the response: {e}"));
    writeln!(stdout)
        .unwrap_or_else(|e| error_exit!("failed to write the response: {e}"));
}

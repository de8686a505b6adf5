use std::path::PathBuf;
use clap::Parser;

/// Handles one function event: JSON on stdin, the response as JSON on
/// stdout.
#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}

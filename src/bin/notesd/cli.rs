use std::path::PathBuf;
use clap::Parser;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Defaults to /etc/notesd/notesd.toml, which may be missing.
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[arg(long)]
    pub syslog: bool,
}

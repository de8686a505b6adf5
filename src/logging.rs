use std::ffi::OsStr;
use std::path::PathBuf;
use boolean_enums::gen_boolean_enum;
use syslog::{BasicLogger, Facility};

pub fn init_tool_logging() {
    init_logging_env()
}

pub fn init_daemon_logging(use_syslog: UseSyslog) {
    if use_syslog.into() {
        init_logging_syslog()
    } else {
        init_tool_logging();
    }
}
gen_boolean_enum!(pub UseSyslog);

fn init_logging_syslog() {
    let formatter = syslog::Formatter3164 {
        facility: Facility::LOG_USER,
        hostname: None,
        process: std::env::args()
            .next()
            .and_then(|name|
                PathBuf::from(name)
                    .file_name()
                    .map(|n| OsStr::to_string_lossy(n).into_owned())
            )
            .unwrap_or_default(),
        pid: std::process::id(),
    };
    let logger = match syslog::unix(formatter) {
        Ok(logger) => logger,
        Err(e) => {
            // nothing to log to yet
            init_logging_env();
            log::error!("syslog initialization failed, logging to stderr: {e}");
            return;
        }
    };
    match log::set_boxed_logger(Box::new(BasicLogger::new(logger))) {
        Ok(()) => log::set_max_level(log::STATIC_MAX_LEVEL),
        Err(e) => log::error!("failed to install the syslog logger: {e}"),
    }
}

fn init_logging_env() {
    env_logger::builder()
        .filter_level(
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            }
        )
        .parse_default_env()
        .init()
}

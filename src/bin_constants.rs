pub const DEFAULT_CONFIG_FILE: &str = "/etc/notesd/notesd.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTESD_";
pub const DEFAULT_PORT: u16 = 10000;

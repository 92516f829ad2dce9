/// Name of the optional TOML settings file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sandglass.toml";

/// Prefix for environment variables read into [`crate::config::Settings`].
pub const ENV_PREFIX: &str = "SANDGLASS";

/// Log filter used until the configured level has been applied.
pub const BOOTSTRAP_LOG_LEVEL: &str = "warn";

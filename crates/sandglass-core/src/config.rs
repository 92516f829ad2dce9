use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub parsing: ParsingConfig,
    pub logging: LoggingConfig,
}

/// Text form accepted by the value parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// `1997-01-01T18:00:00Z`
    Extended,
    /// `19970101T180000Z`
    Basic,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    /// Reject calendar fields that do not name a real date or time of day.
    pub strict: bool,
    pub format: TextFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a builder pre-populated with every default, with no sources attached.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be recorded.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("parsing.strict", false)?
            .set_default("parsing.format", "extended")?
            .set_default("logging.level", "warn")?)
    }

    /// ## Summary
    /// Builds `Settings` from a prepared builder and checks the result.
    ///
    /// ## Errors
    /// Returns an error if building or deserializing the configuration fails,
    /// or if the logging level is empty.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;

        if settings.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(settings)
    }

    /// ## Summary
    /// Returns the defaults layered under `SANDGLASS_…` environment variables,
    /// which are layered under `sandglass.toml`. Later sources win.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be recorded.
    pub fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Self::defaults()?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)))
    }

    /// ## Summary
    /// Loads configuration from environment variables and `sandglass.toml` into a `Settings`.
    /// The TOML file takes precedence over environment variables, which take precedence
    /// over the defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Self::from_builder(Self::builder()?)?;
        tracing::debug!(settings = ?settings, "Settings resolved");
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and `sandglass.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Base URL used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Public origin used to build canonical profile URLs,
    /// e.g. `https://carve.app`. No trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`. Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.base_url", DEFAULT_BASE_URL)?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks the loaded values against the constraints the vCard encoder
    /// relies on: the base URL must be a non-empty http(s) origin without
    /// a trailing slash (the encoder appends `/<username>` itself).
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` describing the first
    /// violated constraint.
    pub fn validate(&self) -> CoreResult<()> {
        let url = self.server.base_url.as_str();
        if url.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "server.base_url must not be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CoreError::InvalidConfiguration(format!(
                "server.base_url must start with http:// or https://, got {url}"
            )));
        }
        if url.ends_with('/') {
            return Err(CoreError::InvalidConfiguration(format!(
                "server.base_url must not end with a slash, got {url}"
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file,
/// then validates it.
///
/// ## Errors
/// Returns an error if loading, deserializing, or validating the
/// configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;

    tracing::debug!(base_url = %settings.server.base_url, "Configuration loaded");

    Ok(settings)
}

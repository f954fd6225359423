//! Runtime configuration.
//!
//! Defaults can be overridden through `ORDER_SERVICE_*` environment variables,
//! e.g. `ORDER_SERVICE_CHANNEL_BUFFER=64` or `ORDER_SERVICE_LOG_FORMAT=json`.
//! Log levels are controlled separately through `RUST_LOG`.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix("ORDER_SERVICE").try_parsing(true))
    }

    fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("channel_buffer", defaults.channel_buffer as u64)?
            .set_default("log_format", "compact")?
            .add_source(environment)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        if config.channel_buffer == 0 {
            return Err(ConfigError::Message("channel_buffer must be greater than zero".into()));
        }
        Ok(config)
    }
}

//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, BacktestSettings, LoggingConfig, StreamConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment. `FXLAB__`-prefixed
/// environment variables override file values.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("FXLAB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

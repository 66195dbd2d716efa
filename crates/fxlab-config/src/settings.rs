//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub backtest: BacktestSettings,
    #[serde(default)]
    pub stream: Option<StreamConfig>,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "fxlab".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Backtest settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestSettings {
    pub initial_balance: Decimal,
    pub risk_fraction: Decimal,
    pub leverage: Decimal,
    /// Bid/ask spread in pips
    pub spread: Decimal,
}

impl Default for BacktestSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            initial_balance: dec!(10000),
            risk_fraction: dec!(0.01),
            leverage: dec!(30),
            spread: dec!(2),
        }
    }
}

/// Live stream settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    pub url: String,
    pub auto_reconnect: bool,
    /// Path of the JSON sync-state cache file
    pub cache_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "fxlab");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.backtest.risk_fraction, dec!(0.01));
        assert!(config.stream.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_str = r#"
            [app]
            name = "fxlab"
            environment = "test"

            [backtest]
            initial_balance = "25000"
            risk_fraction = "0.02"
            leverage = "10"
            spread = "1.5"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.app.environment, "test");
        assert_eq!(config.backtest.initial_balance, dec!(25000));
        assert_eq!(config.backtest.spread, dec!(1.5));
        assert_eq!(config.logging.level, "info");
    }
}

//! Strategy registry for name-based construction.

use std::collections::HashMap;

use fxlab_core::{error::AnalysisError, traits::Strategy};
use serde::{Deserialize, Serialize};

use crate::{RsiReversal, RsiReversalConfig, TrendReversal};

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Strategy name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry of the built-in strategies, keyed by name.
pub struct StrategyRegistry {
    strategies: HashMap<String, StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a registry with all built-in strategies.
    pub fn new() -> Self {
        let mut strategies = HashMap::new();

        strategies.insert(
            "trend_reversal".to_string(),
            StrategyInfo {
                name: "trend_reversal".to_string(),
                description: "Buys confirmed valleys and sells confirmed peaks".to_string(),
                default_config: serde_json::Value::Object(serde_json::Map::new()),
            },
        );

        strategies.insert(
            "rsi_reversal".to_string(),
            StrategyInfo {
                name: "rsi_reversal".to_string(),
                description: "Trades RSI recoveries through the oversold/overbought bands"
                    .to_string(),
                default_config: serde_json::json!({
                    "window": 14,
                    "oversold": "30",
                    "overbought": "70",
                }),
            },
        );

        Self { strategies }
    }

    /// List all available strategies.
    pub fn list(&self) -> Vec<&StrategyInfo> {
        let mut infos: Vec<&StrategyInfo> = self.strategies.values().collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Get strategy info by name.
    pub fn get(&self, name: &str) -> Option<&StrategyInfo> {
        self.strategies.get(name)
    }

    /// Check if a strategy exists.
    pub fn exists(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Create a strategy instance from a JSON configuration.
    pub fn create(
        &self,
        name: &str,
        config: serde_json::Value,
    ) -> Result<Box<dyn Strategy>, AnalysisError> {
        match name {
            "trend_reversal" => Ok(Box::new(TrendReversal::new())),
            "rsi_reversal" => {
                let config: RsiReversalConfig = serde_json::from_value(config)
                    .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
                Ok(Box::new(RsiReversal::new(config)?))
            }
            _ => Err(AnalysisError::StrategyNotFound(name.to_string())),
        }
    }

    /// Create a strategy with its default configuration.
    pub fn create_default(&self, name: &str) -> Result<Box<dyn Strategy>, AnalysisError> {
        let info = self
            .get(name)
            .ok_or_else(|| AnalysisError::StrategyNotFound(name.to_string()))?;
        self.create(name, info.default_config.clone())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

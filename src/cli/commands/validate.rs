//! Validate configuration command.

use anyhow::Result;
use fxlab_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Initial balance: {}", config.backtest.initial_balance);
            println!("Risk fraction: {}", config.backtest.risk_fraction);
            println!("Leverage: {}", config.backtest.leverage);
            println!("Spread (pips): {}", config.backtest.spread);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

//! Backtest command implementation.

use anyhow::{Context, Result};
use fxlab_backtest::{BacktestConfig, BacktestEngine};
use fxlab_config::load_config;
use fxlab_core::traits::ZeroFees;
use fxlab_core::types::{Period, Symbol};
use fxlab_data::CsvSource;
use fxlab_strategies::{Aggregator, StrategyRegistry};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::cli::BacktestArgs;

pub async fn run(args: BacktestArgs, config_path: &Path) -> Result<()> {
    let settings = if config_path.exists() {
        load_config(config_path)
            .context("Failed to load configuration")?
            .backtest
    } else {
        fxlab_config::BacktestSettings::default()
    };

    let symbol = Symbol::from_str(&args.symbol).map_err(anyhow::Error::msg)?;
    let period = Period::from_str(&args.period).map_err(anyhow::Error::msg)?;

    let strategy_configs: serde_json::Value = match &args.strategy_config {
        Some(path) => serde_json::from_str(
            &std::fs::read_to_string(path).context("Failed to read strategy configuration")?,
        )
        .context("Failed to parse strategy configuration")?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };

    let registry = StrategyRegistry::new();
    let mut aggregator = Aggregator::new();
    for name in &args.strategies {
        let strategy = match strategy_configs.get(name) {
            Some(config) => registry.create(name, config.clone()),
            None => registry.create_default(name),
        }
        .with_context(|| format!("Failed to create strategy '{}'", name))?;
        aggregator.register(strategy);
    }
    info!(
        strategies = aggregator.strategy_count(),
        %symbol,
        %period,
        "backtest starting"
    );

    let data_path = args
        .data
        .to_str()
        .context("Data path is not valid UTF-8")?;
    let candles = CsvSource::new(data_path)?.load(symbol, period)?;
    info!(candles = candles.len(), "candles loaded");

    let backtest_config = BacktestConfig {
        initial_balance: args.balance.unwrap_or(settings.initial_balance),
        risk_fraction: args.risk.unwrap_or(settings.risk_fraction),
        leverage: settings.leverage,
        spread: settings.spread,
    };

    let engine = BacktestEngine::new(backtest_config);
    let summary = engine.run(&[candles], &aggregator, &ZeroFees)?;

    match args.output.as_str() {
        "json" => println!("{}", summary.to_json()?),
        _ => println!("{}", summary),
    }

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, summary.to_json()?)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}

//! Pipeline glue: candles in, summary out.

use fxlab_core::{traits::FeeModel, types::{Candle, Transaction}, FxResult};
use fxlab_indicators::detect_extrema;
use fxlab_strategies::Aggregator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ledger::{replay, LedgerConfig};
use crate::matcher::match_signals;
use crate::report::BacktestSummary;

/// Backtest run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Starting balance in USD
    pub initial_balance: Decimal,
    /// Fraction of the balance risked per position
    pub risk_fraction: Decimal,
    /// Notional-to-margin leverage ratio
    pub leverage: Decimal,
    /// Bid/ask spread in pips
    pub spread: Decimal,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            initial_balance: dec!(10000),
            risk_fraction: dec!(0.01),
            leverage: dec!(30),
            spread: dec!(2),
        }
    }
}

impl BacktestConfig {
    fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            initial_balance: self.initial_balance,
            risk_fraction: self.risk_fraction,
            leverage: self.leverage,
        }
    }
}

/// Runs the full pipeline: per candle channel extrema detection, strategy
/// aggregation and transaction matching, then one pooled ledger replay over
/// everything that resolved.
pub struct BacktestEngine {
    config: BacktestConfig,
}

impl BacktestEngine {
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    /// Run a backtest over one or more symbol/period candle channels.
    ///
    /// Each channel must be one instrument at one period, candles ascending
    /// by timestamp.
    pub fn run(
        &self,
        channels: &[Vec<Candle>],
        aggregator: &Aggregator,
        fees: &dyn FeeModel,
    ) -> FxResult<BacktestSummary> {
        let mut transactions: Vec<Transaction> = Vec::new();

        for candles in channels {
            let extrema = detect_extrema(candles);
            let signals = aggregator.analyze(candles, &extrema.peaks, &extrema.valleys)?;
            let matched = match_signals(candles, &signals, self.config.spread);
            info!(
                candles = candles.len(),
                signals = signals.len(),
                matched = matched.len(),
                "channel analyzed"
            );
            transactions.extend(matched);
        }

        let report = replay(&transactions, &self.config.ledger_config(), fees)?;
        Ok(BacktestSummary::new(
            self.config.initial_balance,
            channels.len(),
            transactions.len(),
            report,
        ))
    }
}

//! Multi-strategy signal aggregation.

use std::collections::{BTreeMap, BTreeSet};

use fxlab_core::{
    error::AnalysisError,
    traits::Strategy,
    types::{Candle, CandleKey, Signal},
};
use tracing::debug;

/// Runs every registered strategy over one candle series and merges their
/// signals.
///
/// Signals are keyed by timestamp; on collision the signal of the
/// later-registered strategy wins, so at most one signal survives per candle
/// across all strategies. The merged output is ascending by timestamp.
#[derive(Default)]
pub struct Aggregator {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy. Registration order is the collision precedence.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.push(strategy);
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Merge the signals of all registered strategies.
    ///
    /// Fails when the candle list is empty or the instrument has no USD side;
    /// the ledger's risk conversion needs a direct USD quote.
    pub fn analyze(
        &self,
        candles: &[Candle],
        peaks: &BTreeSet<CandleKey>,
        valleys: &BTreeSet<CandleKey>,
    ) -> Result<Vec<Signal>, AnalysisError> {
        let first = candles.first().ok_or(AnalysisError::EmptyCandles)?;
        if !first.symbol.has_usd_side() {
            return Err(AnalysisError::NonUsdInstrument {
                symbol: first.symbol.to_string(),
            });
        }

        let mut by_timestamp: BTreeMap<i64, Signal> = BTreeMap::new();
        for strategy in &self.strategies {
            let signals = strategy.analyze(candles, peaks, valleys);
            debug!(
                strategy = strategy.name(),
                count = signals.len(),
                "strategy produced signals"
            );
            for signal in signals {
                by_timestamp.insert(signal.timestamp, signal);
            }
        }

        Ok(by_timestamp.into_values().collect())
    }
}

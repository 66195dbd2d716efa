//! RSI band-crossing reversal strategy.

use std::collections::BTreeSet;

use fxlab_core::{
    error::AnalysisError,
    traits::{Indicator, Strategy},
    types::{Candle, CandleKey, Signal},
};
use fxlab_indicators::Rsi;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for [`RsiReversal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiReversalConfig {
    /// RSI smoothing window
    pub window: usize,
    /// Buy when RSI recovers up through this level
    pub oversold: Decimal,
    /// Sell when RSI drops down through this level
    pub overbought: Decimal,
}

impl Default for RsiReversalConfig {
    fn default() -> Self {
        Self {
            window: 14,
            oversold: Decimal::from(30),
            overbought: Decimal::from(70),
        }
    }
}

impl RsiReversalConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.window < 2 {
            return Err(AnalysisError::InvalidConfig(
                "RSI window must be at least 2".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(AnalysisError::InvalidConfig(
                "overbought level must be greater than oversold level".into(),
            ));
        }
        if self.overbought > Decimal::from(100) || self.oversold < Decimal::ZERO {
            return Err(AnalysisError::InvalidConfig(
                "RSI levels must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

/// Flags candles where RSI crosses back through its bands.
///
/// A recovery up through the oversold level flags a buy, a drop down through
/// the overbought level flags a sell. The peak/valley sets are ignored; this
/// strategy reads momentum only.
pub struct RsiReversal {
    config: RsiReversalConfig,
    rsi: Rsi,
}

impl RsiReversal {
    pub fn new(config: RsiReversalConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        let rsi = Rsi::new(config.window);
        Ok(Self { config, rsi })
    }
}

impl Strategy for RsiReversal {
    fn name(&self) -> &str {
        "rsi_reversal"
    }

    fn analyze(
        &self,
        candles: &[Candle],
        _peaks: &BTreeSet<CandleKey>,
        _valleys: &BTreeSet<CandleKey>,
    ) -> Vec<Signal> {
        let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
        let rsi = self.rsi.calculate(&closes);

        let mut buys = BTreeSet::new();
        let mut sells = BTreeSet::new();
        for i in 1..candles.len() {
            let (Some(prev), Some(current)) = (rsi[i - 1], rsi[i]) else {
                continue;
            };
            if prev <= self.config.oversold && current > self.config.oversold {
                buys.insert(candles[i].key());
            } else if prev >= self.config.overbought && current < self.config.overbought {
                sells.insert(candles[i].key());
            }
        }

        crate::signal_builder::build_signals(candles, &buys, &sells)
    }

    fn description(&self) -> &str {
        "Trades RSI recoveries through the oversold/overbought bands"
    }
}

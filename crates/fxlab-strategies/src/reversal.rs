//! Trend-reversal strategy.

use std::collections::BTreeSet;

use fxlab_core::{
    traits::Strategy,
    types::{Candle, CandleKey, Signal},
};

use crate::signal_builder::build_signals;

/// Trades confirmed swing reversals: buys at valleys, sells at peaks.
///
/// The extrema detector has already filtered out shallow retracements, so
/// every remaining key is treated as a tradeable turning point.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendReversal;

impl TrendReversal {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for TrendReversal {
    fn name(&self) -> &str {
        "trend_reversal"
    }

    fn analyze(
        &self,
        candles: &[Candle],
        peaks: &BTreeSet<CandleKey>,
        valleys: &BTreeSet<CandleKey>,
    ) -> Vec<Signal> {
        build_signals(candles, valleys, peaks)
    }

    fn description(&self) -> &str {
        "Buys confirmed valleys and sells confirmed peaks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlab_core::types::{Direction, Period, Symbol};
    use fxlab_indicators::detect_extrema;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn series(closes: &[Decimal]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Candle::new(
                    close,
                    close + dec!(0.001),
                    close - dec!(0.001),
                    close,
                    i as i64 * 14400,
                    Symbol::EurUsd,
                    Period::H4,
                )
            })
            .collect()
    }

    #[test]
    fn test_buys_valleys_sells_peaks() {
        let candles = series(&[
            dec!(1.0),
            dec!(2.0),
            dec!(1.0),
            dec!(2.0),
            dec!(1.0),
            dec!(2.0),
            dec!(1.5),
        ]);
        let extrema = detect_extrema(&candles);
        let strategy = TrendReversal::new();

        let signals = strategy.analyze(&candles, &extrema.peaks, &extrema.valleys);
        assert!(!signals.is_empty());

        for signal in &signals {
            let key = CandleKey {
                symbol: signal.symbol,
                period: signal.period,
                timestamp: signal.timestamp,
            };
            match signal.direction {
                Direction::Buy => assert!(extrema.valleys.contains(&key)),
                Direction::Sell => assert!(extrema.peaks.contains(&key)),
            }
        }
    }
}

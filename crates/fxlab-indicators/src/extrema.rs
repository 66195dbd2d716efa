//! Local extrema detection with retracement filtering.

use std::collections::BTreeSet;

use fxlab_core::types::{Candle, CandleKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Retracement/prior-leg ratio above which a classified extremum is treated
/// as noise. A genuine reversal retraces more than 38.2% of the prior swing
/// leg in the opposite direction, i.e. ratio < -0.382.
const SHALLOW_RETRACEMENT: Decimal = dec!(-0.382);

/// Disjoint peak and valley key sets over one candle series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extrema {
    pub peaks: BTreeSet<CandleKey>,
    pub valleys: BTreeSet<CandleKey>,
}

impl Extrema {
    pub fn is_peak(&self, candle: &Candle) -> bool {
        self.peaks.contains(&candle.key())
    }

    pub fn is_valley(&self, candle: &Candle) -> bool {
        self.valleys.contains(&candle.key())
    }

    pub fn is_extremum(&self, candle: &Candle) -> bool {
        self.is_peak(candle) || self.is_valley(candle)
    }

    /// Total classified candles.
    pub fn len(&self) -> usize {
        self.peaks.len() + self.valleys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty() && self.valleys.is_empty()
    }
}

/// Classify local peaks and valleys by close price, then discard shallow
/// retracements.
///
/// An interior candle is a peak when its close exceeds both neighbours'
/// closes, a valley when it undercuts both. The first and last candle are
/// never classified. The classified candles are then walked in series order:
/// from the fourth one on, each classification whose reversal against the
/// prior swing leg is too shallow (ratio >= -0.382) is dropped from its set.
/// A zero-length prior leg leaves the ratio undefined and keeps the
/// classification.
pub fn detect_extrema(candles: &[Candle]) -> Extrema {
    let mut extrema = Extrema::default();
    if candles.len() < 3 {
        return extrema;
    }

    for i in 1..candles.len() - 1 {
        let candle = &candles[i];
        let prev = &candles[i - 1];
        let next = &candles[i + 1];
        if candle.close > prev.close.max(next.close) {
            extrema.peaks.insert(candle.key());
        } else if candle.close < prev.close.min(next.close) {
            extrema.valleys.insert(candle.key());
        }
    }

    // Ordered subsequence of classified candles, fixed before filtering.
    let classified: Vec<&Candle> = candles
        .iter()
        .filter(|c| extrema.is_extremum(c))
        .collect();

    for j in 3..classified.len() {
        let retracement = classified[j].close - classified[j - 1].close;
        let prior_leg = classified[j - 1].close - classified[j - 2].close;
        if prior_leg.is_zero() {
            // Undefined ratio: no filter signal, keep the classification.
            continue;
        }
        let ratio = retracement / prior_leg;
        if ratio < SHALLOW_RETRACEMENT {
            continue;
        }
        let key = classified[j].key();
        if !extrema.peaks.remove(&key) {
            extrema.valleys.remove(&key);
        }
    }

    extrema
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlab_core::types::{Period, Symbol};
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
    fn test_empty_and_short_input() {
        assert!(detect_extrema(&[]).is_empty());
        let two = series(&[dec!(1), dec!(2)]);
        assert!(detect_extrema(&two).is_empty());
    }

    #[test]
    fn test_boundary_candles_never_classified() {
        let candles = series(&[dec!(5), dec!(1), dec!(3)]);
        let extrema = detect_extrema(&candles);

        // Index 0 is the highest close and index 2 a local high, but only
        // interior candles qualify.
        assert!(!extrema.is_peak(&candles[0]));
        assert!(!extrema.is_peak(&candles[2]));
        assert!(extrema.is_valley(&candles[1]));
    }

    #[test]
    fn test_sets_disjoint_and_subset_of_input() {
        let candles = series(&[
            dec!(1.0),
            dec!(1.4),
            dec!(1.1),
            dec!(1.6),
            dec!(1.2),
            dec!(1.8),
            dec!(1.3),
            dec!(1.9),
            dec!(1.5),
        ]);
        let extrema = detect_extrema(&candles);

        assert!(extrema.peaks.is_disjoint(&extrema.valleys));
        let keys: BTreeSet<CandleKey> = candles.iter().map(Candle::key).collect();
        assert!(extrema.peaks.is_subset(&keys));
        assert!(extrema.valleys.is_subset(&keys));
    }

    #[test]
    fn test_shallow_wiggle_discarded_true_peak_kept() {
        // Rise, deep dip, rise to a true peak, then a shallow dip that
        // retraces well under 38.2% of the prior leg, then rise again.
        let candles = series(&[
            dec!(1.00),
            dec!(1.50), // peak (deep leg follows)
            dec!(1.00), // valley
            dec!(2.00), // true peak, retracement vs prior leg is -1.0/0.5...
            dec!(1.90), // shallow valley candidate: -0.10 / +1.00 = -0.10
            dec!(2.10),
            dec!(2.05),
        ]);
        let extrema = detect_extrema(&candles);

        // The true peak at 2.00 survives; the 1.90 wiggle is classified as a
        // valley at first but filtered out as noise.
        assert!(extrema.is_peak(&candles[3]));
        assert!(!extrema.is_valley(&candles[4]));
    }

    #[test]
    fn test_deep_alternation_keeps_every_extremum() {
        let candles = series(&[
            dec!(1.0),
            dec!(2.0),
            dec!(1.0),
            dec!(2.0),
            dec!(1.0),
            dec!(3.0),
            dec!(2.0),
        ]);
        let extrema = detect_extrema(&candles);

        // Every interior reversal fully retraces the prior leg.
        assert!(extrema.is_peak(&candles[1]));
        assert!(extrema.is_valley(&candles[2]));
        assert!(extrema.is_peak(&candles[3]));
        assert!(extrema.is_valley(&candles[4]));
        assert!(extrema.is_peak(&candles[5]));
    }
}

//! Volatility indicators.

use fxlab_core::traits::Indicator;
use rust_decimal::Decimal;

use crate::smoothing::Ema;

/// Average True Range (ATR).
///
/// True range of the first bar is plain high - low (no prior close exists);
/// every later bar takes the largest of high - low, |high - prev_close| and
/// |low - prev_close|. The true-range series is then EMA-smoothed, so the
/// output is aligned to the input bars.
#[derive(Debug, Clone)]
pub struct Atr {
    window: usize,
}

impl Atr {
    /// Create a new ATR. The signal pipeline uses a window of 14.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }

    /// Calculate ATR from high/low/close series. Inputs are truncated to the
    /// shortest of the three.
    pub fn calculate_ohlc(
        &self,
        highs: &[Decimal],
        lows: &[Decimal],
        closes: &[Decimal],
    ) -> Vec<Decimal> {
        let len = highs.len().min(lows.len()).min(closes.len());
        if len == 0 {
            return Vec::new();
        }

        let mut true_ranges = Vec::with_capacity(len);
        true_ranges.push(highs[0] - lows[0]);

        for i in 1..len {
            let high_low = highs[i] - lows[i];
            let high_close = (highs[i] - closes[i - 1]).abs();
            let low_close = (lows[i] - closes[i - 1]).abs();
            true_ranges.push(high_low.max(high_close).max(low_close));
        }

        Ema::new(self.window).calculate(&true_ranges)
    }

    /// Get the smoothing window.
    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_atr_empty_input() {
        let atr = Atr::new(14);
        assert!(atr.calculate_ohlc(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_atr_first_bar_has_no_prior_close_term() {
        let atr = Atr::new(14);
        // Close far below low: would dominate the true range of bar 0 if a
        // prior close were (wrongly) considered.
        let highs = vec![dec!(12)];
        let lows = vec![dec!(10)];
        let closes = vec![dec!(11)];

        let result = atr.calculate_ohlc(&highs, &lows, &closes);
        assert_eq!(result, vec![dec!(2)]);
    }

    #[test]
    fn test_atr_gap_uses_prior_close() {
        let atr = Atr::new(1); // alpha = 1: ATR equals the raw true range
        let highs = vec![dec!(12), dec!(20)];
        let lows = vec![dec!(10), dec!(19)];
        let closes = vec![dec!(11), dec!(20)];

        let result = atr.calculate_ohlc(&highs, &lows, &closes);
        // Bar 1 gapped up: |20 - 11| = 9 beats 20 - 19 = 1.
        assert_eq!(result, vec![dec!(2), dec!(9)]);
    }

    #[test]
    fn test_atr_aligned_to_input() {
        let atr = Atr::new(3);
        let highs: Vec<Decimal> = (0..10).map(|i| Decimal::from(100 + i)).collect();
        let lows: Vec<Decimal> = (0..10).map(|i| Decimal::from(98 + i)).collect();
        let closes: Vec<Decimal> = (0..10).map(|i| Decimal::from(99 + i)).collect();

        let result = atr.calculate_ohlc(&highs, &lows, &closes);
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|&v| v > Decimal::ZERO));
    }
}

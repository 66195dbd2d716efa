//! Exponential smoothing.

use fxlab_core::traits::Indicator;
use rust_decimal::Decimal;

/// Exponential Moving Average (EMA).
///
/// Seeded with the first sample rather than an SMA warmup, so the output has
/// the same length as the input: `out[0] = data[0]`, then
/// `out[i] = out[i-1] * (1 - alpha) + data[i] * alpha` with
/// `alpha = 2 / (window + 1)`.
#[derive(Debug, Clone)]
pub struct Ema {
    window: usize,
    alpha: Decimal,
}

impl Ema {
    /// Create a new EMA with the specified window.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        let alpha = Decimal::from(2) / Decimal::from(window as u64 + 1);
        Self { window, alpha }
    }
}

impl Indicator for Ema {
    type Output = Decimal;

    fn calculate(&self, data: &[Decimal]) -> Vec<Decimal> {
        let mut result = Vec::with_capacity(data.len());
        let one_minus_alpha = Decimal::ONE - self.alpha;

        let mut ema = match data.first() {
            Some(&first) => first,
            None => return result,
        };
        result.push(ema);

        for &value in &data[1..] {
            ema = ema * one_minus_alpha + value * self.alpha;
            result.push(ema);
        }

        result
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

//! Momentum indicators.

use fxlab_core::traits::Indicator;
use rust_decimal::Decimal;

/// Relative Strength Index (RSI).
///
/// Wilder-style smoothed gain/loss ratio. The output is aligned to the
/// input; positions before `window` price changes have accumulated carry the
/// `None` warmup sentinel.
#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
}

impl Rsi {
    /// Create a new RSI. Common windows are 14 and 7.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }

    fn rsi_value(avg_gain: Decimal, avg_loss: Decimal) -> Decimal {
        let hundred = Decimal::from(100);
        if avg_loss.is_zero() {
            return hundred;
        }
        let rs = avg_gain / avg_loss;
        hundred - hundred / (Decimal::ONE + rs)
    }
}

impl Indicator for Rsi {
    type Output = Option<Decimal>;

    fn calculate(&self, data: &[Decimal]) -> Vec<Option<Decimal>> {
        let mut result = Vec::with_capacity(data.len());
        if data.is_empty() {
            return result;
        }

        let window_dec = Decimal::from(self.window as u64);
        let mut gain_sum = Decimal::ZERO;
        let mut loss_sum = Decimal::ZERO;
        let mut avg_gain = Decimal::ZERO;
        let mut avg_loss = Decimal::ZERO;

        result.push(None); // no delta at the first sample

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            let gain = change.max(Decimal::ZERO);
            let loss = (-change).max(Decimal::ZERO);

            if i < self.window {
                // still accumulating the seed averages
                gain_sum += gain;
                loss_sum += loss;
                result.push(None);
            } else if i == self.window {
                gain_sum += gain;
                loss_sum += loss;
                avg_gain = gain_sum / window_dec;
                avg_loss = loss_sum / window_dec;
                result.push(Some(Self::rsi_value(avg_gain, avg_loss)));
            } else {
                avg_gain = (avg_gain * (window_dec - Decimal::ONE) + gain) / window_dec;
                avg_loss = (avg_loss * (window_dec - Decimal::ONE) + loss) / window_dec;
                result.push(Some(Self::rsi_value(avg_gain, avg_loss)));
            }
        }

        result
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

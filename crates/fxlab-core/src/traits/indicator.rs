//! Indicator trait definition.

use rust_decimal::Decimal;

/// Trait for technical indicators over exact-decimal sequences.
///
/// Outputs are aligned to the input: `calculate` returns one value per input
/// sample (the output type may carry a warmup sentinel), and an empty input
/// always yields an empty output.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[Decimal]) -> Vec<Self::Output>;

    /// Get the smoothing window.
    fn window(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

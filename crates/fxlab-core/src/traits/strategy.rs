//! Strategy trait definition.

use std::collections::BTreeSet;

use crate::types::{Candle, CandleKey, Signal};

/// Core strategy trait.
///
/// A strategy reads one symbol/period candle series together with the
/// detected peak and valley sets and emits entry signals. Strategies are
/// registered explicitly with the aggregator by the caller; there is no
/// dynamic discovery.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Analyze a candle series and produce entry signals.
    ///
    /// `peaks` and `valleys` are disjoint key sets over the same series.
    /// Implementations must anchor each signal on a candle of `candles` and
    /// must not emit more than one signal per candle.
    fn analyze(
        &self,
        candles: &[Candle],
        peaks: &BTreeSet<CandleKey>,
        valleys: &BTreeSet<CandleKey>,
    ) -> Vec<Signal>;

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Strategy for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn analyze(
            &self,
            _candles: &[Candle],
            _peaks: &BTreeSet<CandleKey>,
            _valleys: &BTreeSet<CandleKey>,
        ) -> Vec<Signal> {
            Vec::new()
        }
    }

    #[test]
    fn test_object_safety() {
        let boxed: Box<dyn Strategy> = Box::new(Silent);
        assert_eq!(boxed.name(), "silent");
        assert!(boxed
            .analyze(&[], &BTreeSet::new(), &BTreeSet::new())
            .is_empty());
    }
}

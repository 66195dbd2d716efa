//! Converts flagged candles into concrete entry signals.
//!
//! Strategies decide WHICH candles to trade; this module decides the levels.
//! Stops are placed one ATR beyond the two-bar extreme and the take-profit
//! mirrors the stop distance (forced 1:1 reward/risk).

use std::collections::BTreeSet;

use fxlab_core::types::{Candle, CandleKey, Direction, Signal};
use fxlab_indicators::Atr;
use rust_decimal::Decimal;

/// ATR window used for stop placement.
pub const ATR_WINDOW: usize = 14;

/// Build entry signals for every flagged candle.
///
/// The first candle never produces a signal: stop placement needs the
/// predecessor's high/low. A candle flagged both buy and sell produces a
/// single buy signal.
pub fn build_signals(
    candles: &[Candle],
    buys: &BTreeSet<CandleKey>,
    sells: &BTreeSet<CandleKey>,
) -> Vec<Signal> {
    if candles.len() < 2 {
        return Vec::new();
    }

    let highs: Vec<Decimal> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<Decimal> = candles.iter().map(|c| c.low).collect();
    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
    let atr = Atr::new(ATR_WINDOW).calculate_ohlc(&highs, &lows, &closes);

    let mut signals = Vec::new();
    for i in 1..candles.len() {
        let candle = &candles[i];
        let prev = &candles[i - 1];
        let key = candle.key();

        // Buy takes precedence when a candle carries both flags.
        let direction = if buys.contains(&key) {
            Direction::Buy
        } else if sells.contains(&key) {
            Direction::Sell
        } else {
            continue;
        };

        let entry = candle.close;
        let (stop_loss, take_profit) = match direction {
            Direction::Buy => {
                let stop = candle.low.min(prev.low) - atr[i];
                (stop, entry + (entry - stop))
            }
            Direction::Sell => {
                let stop = candle.high.max(prev.high) + atr[i];
                (stop, entry - (stop - entry))
            }
        };

        signals.push(Signal {
            direction,
            entry,
            timestamp: candle.timestamp,
            stop_loss,
            take_profit,
            symbol: candle.symbol,
            period: candle.period,
        });
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlab_core::types::{Period, Symbol};
    use rust_decimal_macros::dec;

    fn candle(close: Decimal, timestamp: i64) -> Candle {
        Candle::new(
            close,
            close + dec!(0.002),
            close - dec!(0.002),
            close,
            timestamp,
            Symbol::EurUsd,
            Period::H4,
        )
    }

    #[test]
    fn test_first_candle_never_signals() {
        let candles = vec![candle(dec!(1.10), 0), candle(dec!(1.11), 14400)];
        let mut buys = BTreeSet::new();
        buys.insert(candles[0].key());

        assert!(build_signals(&candles, &buys, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_buy_levels_one_to_one() {
        let candles = vec![candle(dec!(1.10), 0), candle(dec!(1.11), 14400)];
        let mut buys = BTreeSet::new();
        buys.insert(candles[1].key());

        let signals = build_signals(&candles, &buys, &BTreeSet::new());
        assert_eq!(signals.len(), 1);

        let signal = &signals[0];
        assert_eq!(signal.direction, Direction::Buy);
        assert_eq!(signal.entry, dec!(1.11));
        assert!(signal.stop_loss < candles[0].low.min(candles[1].low));
        // Reward distance mirrors risk distance.
        assert_eq!(
            signal.take_profit - signal.entry,
            signal.entry - signal.stop_loss
        );
    }

    #[test]
    fn test_sell_stop_above_two_bar_high() {
        let candles = vec![candle(dec!(1.12), 0), candle(dec!(1.10), 14400)];
        let mut sells = BTreeSet::new();
        sells.insert(candles[1].key());

        let signals = build_signals(&candles, &BTreeSet::new(), &sells);
        assert_eq!(signals.len(), 1);

        let signal = &signals[0];
        assert_eq!(signal.direction, Direction::Sell);
        assert!(signal.stop_loss > candles[0].high.max(candles[1].high));
        assert_eq!(
            signal.entry - signal.take_profit,
            signal.stop_loss - signal.entry
        );
    }

    #[test]
    fn test_double_flag_resolves_to_buy() {
        let candles = vec![candle(dec!(1.10), 0), candle(dec!(1.11), 14400)];
        let mut buys = BTreeSet::new();
        let mut sells = BTreeSet::new();
        buys.insert(candles[1].key());
        sells.insert(candles[1].key());

        let signals = build_signals(&candles, &buys, &sells);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].direction, Direction::Buy);
    }
}

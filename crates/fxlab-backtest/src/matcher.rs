//! Signal-to-transaction matching.

use fxlab_core::types::{Candle, Direction, Outcome, Signal, Transaction};
use rust_decimal::Decimal;
use tracing::debug;

/// Pip divisor: JPY-quoted pairs use two decimal places, everything else
/// four.
fn spread_price(signal: &Signal, spread: Decimal) -> Decimal {
    let divisor = if signal.symbol.is_jpy_quoted() {
        Decimal::from(100)
    } else {
        Decimal::from(10_000)
    };
    spread / divisor
}

/// Test one pending signal against one candle. Stop-loss is checked before
/// take-profit: when both levels fall inside the same bar the pessimistic
/// outcome wins, since no intra-bar path data exists.
fn resolve(signal: &Signal, candle: &Candle, half_spread: Decimal) -> Option<Outcome> {
    match signal.direction {
        Direction::Buy => {
            if candle.low - half_spread <= signal.stop_loss {
                Some(Outcome::StopLoss)
            } else if candle.high - half_spread >= signal.take_profit {
                Some(Outcome::TakeProfit)
            } else {
                None
            }
        }
        Direction::Sell => {
            if candle.high + half_spread >= signal.stop_loss {
                Some(Outcome::StopLoss)
            } else if candle.low + half_spread <= signal.take_profit {
                Some(Outcome::TakeProfit)
            } else {
                None
            }
        }
    }
}

/// Replay one symbol/period candle series against its signals.
///
/// `spread` is in pips. A signal joins the pending set only from the candle
/// after its own, so a position can never resolve on the bar that produced
/// it. Signals still pending when the series ends are dropped without a
/// transaction.
pub fn match_signals(candles: &[Candle], signals: &[Signal], spread: Decimal) -> Vec<Transaction> {
    let mut ordered: Vec<Signal> = signals.to_vec();
    ordered.sort_by_key(|s| s.timestamp);

    let mut upcoming = ordered.iter().peekable();
    let mut pending: Vec<Signal> = Vec::new();
    let mut transactions = Vec::new();

    for candle in candles {
        while let Some(signal) = upcoming.peek() {
            if signal.timestamp >= candle.timestamp {
                break;
            }
            pending.push(**signal);
            upcoming.next();
        }

        pending.retain(|signal| {
            let half_spread = spread_price(signal, spread) / Decimal::from(2);
            match resolve(signal, candle, half_spread) {
                Some(outcome) => {
                    transactions.push(Transaction::from_signal(
                        signal,
                        candle.timestamp,
                        outcome,
                    ));
                    false
                }
                None => true,
            }
        });
    }

    if !pending.is_empty() {
        debug!(
            unresolved = pending.len(),
            "signals still open at series end, dropped"
        );
    }

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlab_core::types::{Period, Symbol};
    use rust_decimal_macros::dec;

    fn candle(high: Decimal, low: Decimal, timestamp: i64) -> Candle {
        Candle::new(
            low,
            high,
            low,
            high,
            timestamp,
            Symbol::EurUsd,
            Period::H4,
        )
    }

    fn buy_signal(timestamp: i64) -> Signal {
        Signal {
            direction: Direction::Buy,
            entry: dec!(1.1000),
            timestamp,
            stop_loss: dec!(1.0950),
            take_profit: dec!(1.1050),
            symbol: Symbol::EurUsd,
            period: Period::H4,
        }
    }

    #[test]
    fn test_no_resolution_on_signal_bar() {
        // The signal's own bar spans both levels; it must not resolve there.
        let candles = vec![candle(dec!(1.2000), dec!(1.0000), 0)];
        let signals = vec![buy_signal(0)];

        assert!(match_signals(&candles, &signals, dec!(2)).is_empty());
    }

    #[test]
    fn test_stop_loss_checked_before_take_profit() {
        let candles = vec![
            candle(dec!(1.1010), dec!(1.0990), 0),
            // Both levels inside one bar.
            candle(dec!(1.1100), dec!(1.0900), 14400),
        ];
        let signals = vec![buy_signal(0)];

        let transactions = match_signals(&candles, &signals, dec!(2));
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].outcome, Outcome::StopLoss);
        assert_eq!(transactions[0].close_timestamp, 14400);
    }

    #[test]
    fn test_take_profit_with_spread_drag() {
        // Bid high exactly at take-profit once the half-spread is deducted.
        // spread 2 pips -> half_spread 0.0001.
        let candles = vec![
            candle(dec!(1.1010), dec!(1.0990), 0),
            candle(dec!(1.1051), dec!(1.1000), 14400),
        ];
        let signals = vec![buy_signal(0)];

        let transactions = match_signals(&candles, &signals, dec!(2));
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].outcome, Outcome::TakeProfit);
    }

    #[test]
    fn test_spread_blocks_marginal_take_profit() {
        // Raw high touches take-profit, bid high does not.
        let candles = vec![
            candle(dec!(1.1010), dec!(1.0990), 0),
            candle(dec!(1.1050), dec!(1.1000), 14400),
        ];
        let signals = vec![buy_signal(0)];

        assert!(match_signals(&candles, &signals, dec!(2)).is_empty());
    }

    #[test]
    fn test_sell_symmetry() {
        let sell = Signal {
            direction: Direction::Sell,
            entry: dec!(1.1000),
            timestamp: 0,
            stop_loss: dec!(1.1050),
            take_profit: dec!(1.0950),
            symbol: Symbol::EurUsd,
            period: Period::H4,
        };
        let candles = vec![
            candle(dec!(1.1010), dec!(1.0990), 0),
            // Ask high breaches the sell stop.
            candle(dec!(1.1050), dec!(1.0960), 14400),
        ];

        let transactions = match_signals(&candles, &[sell], dec!(2));
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].outcome, Outcome::StopLoss);
    }

    #[test]
    fn test_unresolved_signals_dropped() {
        let candles = vec![
            candle(dec!(1.1010), dec!(1.0990), 0),
            candle(dec!(1.1011), dec!(1.0991), 14400),
        ];
        let signals = vec![buy_signal(0)];

        assert!(match_signals(&candles, &signals, dec!(2)).is_empty());
    }
}

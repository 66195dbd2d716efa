//! Resolved transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Direction, Signal, Symbol};

/// How a position resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TakeProfit,
    StopLoss,
}

impl Outcome {
    pub fn is_take_profit(&self) -> bool {
        matches!(self, Outcome::TakeProfit)
    }
}

/// A position with a known open and close, produced by the matcher.
///
/// The matcher fixes the price levels and the outcome; the ledger fills the
/// sizing fields (`size`, `risk_usd`, `notional_usd`, `reserved_margin_usd`)
/// at admission. Nothing is mutated after the close is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id
    pub id: Uuid,
    /// Open timestamp of the signal candle (unix seconds)
    pub open_timestamp: i64,
    /// Open timestamp of the resolving candle; strictly after `open_timestamp`
    pub close_timestamp: i64,
    /// Buy or sell
    pub direction: Direction,
    /// Entry price
    pub entry: Decimal,
    /// Stop-loss level
    pub stop_loss: Decimal,
    /// Take-profit level
    pub take_profit: Decimal,
    /// Resolution
    pub outcome: Outcome,
    /// Instrument
    pub symbol: Symbol,
    /// Position size in base units, filled at admission
    pub size: Decimal,
    /// USD risked if stopped out, filled at admission
    pub risk_usd: Decimal,
    /// USD order notional, filled at admission
    pub notional_usd: Decimal,
    /// USD margin reserved against the position, filled at admission
    pub reserved_margin_usd: Decimal,
}

impl Transaction {
    /// Create a transaction from a resolved signal. Sizing fields start at
    /// zero and are filled by the ledger when the position is admitted.
    pub fn from_signal(signal: &Signal, close_timestamp: i64, outcome: Outcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            open_timestamp: signal.timestamp,
            close_timestamp,
            direction: signal.direction,
            entry: signal.entry,
            stop_loss: signal.stop_loss,
            take_profit: signal.take_profit,
            outcome,
            symbol: signal.symbol,
            size: Decimal::ZERO,
            risk_usd: Decimal::ZERO,
            notional_usd: Decimal::ZERO,
            reserved_margin_usd: Decimal::ZERO,
        }
    }

    /// Price at which the position filled on close.
    pub fn fill_price(&self) -> Decimal {
        match self.outcome {
            Outcome::TakeProfit => self.take_profit,
            Outcome::StopLoss => self.stop_loss,
        }
    }

    /// True when two transactions would be the same economic order: same
    /// entry, stop-loss, take-profit and instrument. Used by the ledger to
    /// reject duplicates among concurrently pending positions.
    pub fn same_order(&self, other: &Transaction) -> bool {
        self.entry == other.entry
            && self.stop_loss == other.stop_loss
            && self.take_profit == other.take_profit
            && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;
    use rust_decimal_macros::dec;

    fn signal() -> Signal {
        Signal {
            direction: Direction::Buy,
            entry: dec!(1.1000),
            timestamp: 1000,
            stop_loss: dec!(1.0950),
            take_profit: dec!(1.1050),
            symbol: Symbol::EurUsd,
            period: Period::H4,
        }
    }

    #[test]
    fn test_fill_price_follows_outcome() {
        let tp = Transaction::from_signal(&signal(), 2000, Outcome::TakeProfit);
        let sl = Transaction::from_signal(&signal(), 2000, Outcome::StopLoss);

        assert_eq!(tp.fill_price(), dec!(1.1050));
        assert_eq!(sl.fill_price(), dec!(1.0950));
    }

    #[test]
    fn test_same_order_ignores_timestamps() {
        let a = Transaction::from_signal(&signal(), 2000, Outcome::TakeProfit);
        let mut later = signal();
        later.timestamp = 5000;
        let b = Transaction::from_signal(&later, 9000, Outcome::StopLoss);

        assert!(a.same_order(&b));
        assert_ne!(a.id, b.id);
    }
}

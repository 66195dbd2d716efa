//! Trade direction and entry signals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Period, Symbol};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Get the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Direction::Buy)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

/// A directional entry signal anchored on one candle.
///
/// Produced by strategies, consumed by the transaction matcher within the
/// same pipeline run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Buy or sell
    pub direction: Direction,
    /// Entry price (the triggering candle's close)
    pub entry: Decimal,
    /// Open timestamp of the triggering candle (unix seconds)
    pub timestamp: i64,
    /// Stop-loss level
    pub stop_loss: Decimal,
    /// Take-profit level
    pub take_profit: Decimal,
    /// Instrument
    pub symbol: Symbol,
    /// Bar period of the originating series
    pub period: Period,
}

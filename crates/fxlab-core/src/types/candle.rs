//! OHLC candle types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Period, Symbol};

/// A single OHLC bar. Prices are exact decimals; `timestamp` is the unix
/// second at which the bar opened. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Opening price
    pub open: Decimal,
    /// Highest price
    pub high: Decimal,
    /// Lowest price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Unix timestamp (seconds) of the bar open
    pub timestamp: i64,
    /// Instrument
    pub symbol: Symbol,
    /// Bar period
    pub period: Period,
}

impl Candle {
    /// Create a new candle.
    pub fn new(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        timestamp: i64,
        symbol: Symbol,
        period: Period,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            timestamp,
            symbol,
            period,
        }
    }

    /// Membership key for ordered peak/valley sets.
    pub fn key(&self) -> CandleKey {
        CandleKey {
            symbol: self.symbol,
            period: self.period,
            timestamp: self.timestamp,
        }
    }

    /// The bar's body size (absolute open-to-close distance).
    #[inline]
    pub fn body(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// The bar's full range (high - low).
    #[inline]
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Upper wick: high above the body.
    #[inline]
    pub fn upper_wick(&self) -> Decimal {
        self.high - self.close.max(self.open)
    }

    /// Lower wick: low below the body.
    #[inline]
    pub fn lower_wick(&self) -> Decimal {
        self.close.min(self.open) - self.low
    }

    /// Check if the bar closed above its open.
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar closed below its open.
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Get the open time as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or_default()
    }
}

/// Explicit (symbol, period, timestamp) identity for a candle.
///
/// Peak/valley membership and signal deduplication key on this value rather
/// than on candle object identity, so two equal-valued candles from
/// different loads compare the same.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CandleKey {
    pub symbol: Symbol,
    pub period: Period,
    pub timestamp: i64,
}

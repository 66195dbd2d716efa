//! Fee model trait.

use rust_decimal::Decimal;

use crate::types::{Direction, Symbol};

/// Broker fee capability used by the ledger.
///
/// Both methods return a signed USD amount that is added to the balance;
/// real-world fees are typically negative. Implementations must be stateless
/// and pure so independent backtest runs can share one model.
pub trait FeeModel: Send + Sync {
    /// Commission for an order of the given USD notional. Charged once at
    /// open and once at close.
    fn commission(&self, notional_usd: Decimal) -> Decimal;

    /// Overnight swap for holding `lot` lots (100k base units each) between
    /// the two timestamps.
    fn swap(
        &self,
        symbol: Symbol,
        lot: Decimal,
        open_timestamp: i64,
        close_timestamp: i64,
        direction: Direction,
    ) -> Decimal;
}

/// Frictionless fee model for experiments and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroFees;

impl FeeModel for ZeroFees {
    fn commission(&self, _notional_usd: Decimal) -> Decimal {
        Decimal::ZERO
    }

    fn swap(
        &self,
        _symbol: Symbol,
        _lot: Decimal,
        _open_timestamp: i64,
        _close_timestamp: i64,
        _direction: Direction,
    ) -> Decimal {
        Decimal::ZERO
    }
}

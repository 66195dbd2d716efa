//! Backtesting engine.
//!
//! `matcher` resolves signals into transactions against candle history,
//! `ledger` replays resolved transactions under margin and risk admission
//! control, and `engine` wires the full pipeline per symbol/period channel.

mod engine;
mod ledger;
mod matcher;
mod report;

pub use engine::{BacktestConfig, BacktestEngine};
pub use ledger::{replay, BalancePoint, LedgerConfig, LedgerReport};
pub use matcher::match_signals;
pub use report::BacktestSummary;

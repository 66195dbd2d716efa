//! Trading strategy implementations.
//!
//! This crate turns classified candle series into entry signals:
//! - `signal_builder` converts buy/sell-flagged candles into stop/target orders
//! - `TrendReversal` trades confirmed valleys and peaks
//! - `RsiReversal` trades RSI band crossings
//! - `Aggregator` merges the outputs of every registered strategy

mod aggregator;
mod registry;
mod reversal;
mod rsi_reversal;
pub mod signal_builder;

pub use aggregator::Aggregator;
pub use registry::{StrategyInfo, StrategyRegistry};
pub use reversal::TrendReversal;
pub use rsi_reversal::{RsiReversal, RsiReversalConfig};
pub use signal_builder::build_signals;

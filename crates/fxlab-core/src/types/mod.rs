//! Core data types for the backtester.

mod candle;
mod period;
mod signal;
mod symbol;
mod transaction;

pub use candle::{Candle, CandleKey};
pub use period::Period;
pub use signal::{Direction, Signal};
pub use symbol::Symbol;
pub use transaction::{Outcome, Transaction};

//! CLI command implementations.

pub mod backtest;
pub mod strategies;
pub mod stream;
pub mod validate;

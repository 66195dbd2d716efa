//! Core types and traits for the backtester.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Candle, Symbol, Period)
//! - Signals and resolved transactions
//! - Core traits for strategies, indicators, and fee models

pub mod types;
pub mod traits;
pub mod error;

pub use error::{FxError, FxResult};
pub use types::*;
pub use traits::*;

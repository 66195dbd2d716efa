//! Core traits for the backtester.

mod fees;
mod indicator;
mod strategy;

pub use fees::{FeeModel, ZeroFees};
pub use indicator::Indicator;
pub use strategy::Strategy;

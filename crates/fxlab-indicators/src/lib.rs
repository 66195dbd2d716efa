//! Technical indicators and trend-extrema detection.
//!
//! This crate provides the exact-decimal indicator set the signal pipeline
//! relies on:
//! - Exponential moving average (EMA)
//! - Average true range (ATR)
//! - Relative strength index (RSI, Wilder smoothing)
//! - Local peak/valley detection with a retracement noise filter
//!
//! All indicators return output aligned to their input and yield an empty
//! vector for empty input.

pub mod extrema;
pub mod momentum;
pub mod smoothing;
pub mod volatility;

pub use extrema::{detect_extrema, Extrema};
pub use momentum::Rsi;
pub use smoothing::Ema;
pub use volatility::Atr;

//! Error types for the backtester.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Signal-generation (analysis) errors. These are fatal preconditions:
/// the run aborts, nothing is partially produced.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("candle list is empty")]
    EmptyCandles,

    #[error("unsupported instrument {symbol}: neither side is USD, risk amounts cannot be converted")]
    NonUsdInstrument { symbol: String },

    #[error("invalid strategy configuration: {0}")]
    InvalidConfig(String),

    #[error("strategy not found: {0}")]
    StrategyNotFound(String),
}

/// Portfolio ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("no transactions to replay")]
    NoTransactions,

    #[error("invalid ledger parameter: {0}")]
    InvalidParameter(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no data available at {0}")]
    NoDataAvailable(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("cache error: {0}")]
    CacheError(String),

    #[error("stream error: {0}")]
    StreamError(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("mismatched input lengths: {0}")]
    MismatchedInputs(String),
}

/// Result type alias for backtester operations.
pub type FxResult<T> = Result<T, FxError>;

//! Candle data sources.
//!
//! Historical candles come from CSV files, small key/value state (sync
//! markers, last-seen timestamps) lives in a JSON file cache, and live
//! candles arrive over a reconnecting websocket stream.

mod cache;
mod csv_source;
mod stream;

pub use cache::JsonCache;
pub use csv_source::CsvSource;
pub use stream::{StreamClient, StreamHandler, StreamSink};

use fxlab_core::error::DataError;
use fxlab_core::types::{Candle, Period, Symbol};

/// Load candles for one symbol/period channel from a CSV file.
pub fn load_csv(path: &str, symbol: Symbol, period: Period) -> Result<Vec<Candle>, DataError> {
    CsvSource::new(path)?.load(symbol, period)
}

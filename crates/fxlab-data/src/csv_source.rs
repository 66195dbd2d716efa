//! CSV candle source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use fxlab_core::error::DataError;
use fxlab_core::types::{Candle, Period, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// CSV record format. Prices deserialize straight into decimals; no float
/// round-trip.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: Decimal,
    #[serde(alias = "High", alias = "high")]
    high: Decimal,
    #[serde(alias = "Low", alias = "low")]
    low: Decimal,
    #[serde(alias = "Close", alias = "close")]
    close: Decimal,
}

/// CSV source for historical candles.
pub struct CsvSource {
    path: String,
}

impl CsvSource {
    /// Create a new CSV source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable(path.to_string()));
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load all candles, tagged with the given symbol and period, ascending
    /// by timestamp.
    pub fn load(&self, symbol: Symbol, period: Period) -> Result<Vec<Candle>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut candles = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;

            candles.push(Candle::new(
                record.open,
                record.high,
                record.low,
                record.close,
                timestamp,
                symbol,
                period,
            ));
        }

        candles.sort_by_key(|c| c.timestamp);

        Ok(candles)
    }
}

/// Parse a date cell into a unix second, trying common formats before
/// falling back to a raw unix timestamp (milliseconds if over 10 digits).
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp());
            }
        }
    }

    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts / 1000);
        }
        return Ok(ts);
    }

    Err(DataError::ParseError(format!(
        "could not parse date: {}",
        date_str
    )))
}

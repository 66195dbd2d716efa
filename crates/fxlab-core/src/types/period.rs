//! Bar period definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period of a candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// 5 minute candles
    M5,
    /// 15 minute candles
    M15,
    /// 30 minute candles
    M30,
    /// 1 hour candles
    H1,
    /// 4 hour candles
    #[default]
    H4,
    /// 12 hour candles
    H12,
    /// Daily candles
    D1,
    /// Weekly candles
    W1,
}

impl Period {
    /// Get the duration of the period in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Period::M5 => 300,
            Period::M15 => 900,
            Period::M30 => 1800,
            Period::H1 => 3600,
            Period::H4 => 14400,
            Period::H12 => 43200,
            Period::D1 => 86400,
            Period::W1 => 604800,
        }
    }

    /// Get all available periods.
    pub fn all() -> &'static [Period] {
        &[
            Period::M5,
            Period::M15,
            Period::M30,
            Period::H1,
            Period::H4,
            Period::H12,
            Period::D1,
            Period::W1,
        ]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::M5 => "m5",
            Period::M15 => "m15",
            Period::M30 => "m30",
            Period::H1 => "h1",
            Period::H4 => "h4",
            Period::H12 => "h12",
            Period::D1 => "d1",
            Period::W1 => "w1",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m5" | "5m" => Ok(Period::M5),
            "m15" | "15m" => Ok(Period::M15),
            "m30" | "30m" => Ok(Period::M30),
            "h1" | "1h" => Ok(Period::H1),
            "h4" | "4h" => Ok(Period::H4),
            "h12" | "12h" => Ok(Period::H12),
            "d1" | "1d" | "daily" => Ok(Period::D1),
            "w1" | "1w" | "weekly" => Ok(Period::W1),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}

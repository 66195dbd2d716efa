//! Instrument symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported instruments. All pairs carry USD on at least one side except
/// where noted; the ledger's risk math requires a USD side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    EurUsd,
    UsdJpy,
    GbpUsd,
    AudUsd,
    UsdChf,
    UsdCad,
    NzdUsd,
    BtcUsd,
    EthUsd,
    XauUsd,
}

impl Symbol {
    /// The base currency (left side of the pair), lowercase.
    pub fn base(&self) -> &'static str {
        &self.as_str()[..3]
    }

    /// The quote currency (right side of the pair), lowercase.
    pub fn quote(&self) -> &'static str {
        &self.as_str()[3..]
    }

    /// True when the pair is quoted in USD (e.g. eurusd).
    pub fn is_usd_quoted(&self) -> bool {
        self.quote() == "usd"
    }

    /// True when USD sits on either side of the pair.
    pub fn has_usd_side(&self) -> bool {
        self.quote() == "usd" || self.base() == "usd"
    }

    /// True when the pair is quoted in JPY (pip size 0.01 instead of 0.0001).
    pub fn is_jpy_quoted(&self) -> bool {
        self.quote() == "jpy"
    }

    fn as_str(&self) -> &'static str {
        match self {
            Symbol::EurUsd => "eurusd",
            Symbol::UsdJpy => "usdjpy",
            Symbol::GbpUsd => "gbpusd",
            Symbol::AudUsd => "audusd",
            Symbol::UsdChf => "usdchf",
            Symbol::UsdCad => "usdcad",
            Symbol::NzdUsd => "nzdusd",
            Symbol::BtcUsd => "btcusd",
            Symbol::EthUsd => "ethusd",
            Symbol::XauUsd => "xauusd",
        }
    }

    /// Get all supported symbols.
    pub fn all() -> &'static [Symbol] {
        &[
            Symbol::EurUsd,
            Symbol::UsdJpy,
            Symbol::GbpUsd,
            Symbol::AudUsd,
            Symbol::UsdChf,
            Symbol::UsdCad,
            Symbol::NzdUsd,
            Symbol::BtcUsd,
            Symbol::EthUsd,
            Symbol::XauUsd,
        ]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eurusd" => Ok(Symbol::EurUsd),
            "usdjpy" => Ok(Symbol::UsdJpy),
            "gbpusd" => Ok(Symbol::GbpUsd),
            "audusd" => Ok(Symbol::AudUsd),
            "usdchf" => Ok(Symbol::UsdChf),
            "usdcad" => Ok(Symbol::UsdCad),
            "nzdusd" => Ok(Symbol::NzdUsd),
            "btcusd" => Ok(Symbol::BtcUsd),
            "ethusd" => Ok(Symbol::EthUsd),
            "xauusd" => Ok(Symbol::XauUsd),
            _ => Err(format!("Unknown symbol: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_quote() {
        assert_eq!(Symbol::EurUsd.base(), "eur");
        assert_eq!(Symbol::EurUsd.quote(), "usd");
        assert_eq!(Symbol::UsdJpy.base(), "usd");
        assert_eq!(Symbol::UsdJpy.quote(), "jpy");
    }

    #[test]
    fn test_usd_side() {
        assert!(Symbol::EurUsd.is_usd_quoted());
        assert!(!Symbol::UsdJpy.is_usd_quoted());
        assert!(Symbol::UsdJpy.has_usd_side());
        assert!(Symbol::UsdJpy.is_jpy_quoted());
    }

    #[test]
    fn test_parse_roundtrip() {
        for &symbol in Symbol::all() {
            assert_eq!(Symbol::from_str(&symbol.to_string()).unwrap(), symbol);
        }
        assert!(Symbol::from_str("eurgbp").is_err());
    }
}

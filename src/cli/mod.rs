//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fxlab")]
#[command(author, version, about = "Rule-based trading strategy backtester")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a backtest over CSV candle data
    Backtest(BacktestArgs),
    /// Follow the live candle stream and record sync state
    Stream,
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct BacktestArgs {
    /// Strategies to run (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_value = "trend_reversal")]
    pub strategies: Vec<String>,

    /// Instrument symbol (e.g. eurusd)
    #[arg(short = 'S', long, default_value = "eurusd")]
    pub symbol: String,

    /// Bar period (e.g. h4)
    #[arg(short, long, default_value = "h4")]
    pub period: String,

    /// Candle data file (CSV)
    #[arg(long)]
    pub data: PathBuf,

    /// Initial balance override
    #[arg(long)]
    pub balance: Option<rust_decimal::Decimal>,

    /// Risk fraction override
    #[arg(long)]
    pub risk: Option<rust_decimal::Decimal>,

    /// Strategy configuration file (JSON, keyed by strategy name)
    #[arg(long)]
    pub strategy_config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

//! Backtest summary generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{BalancePoint, LedgerReport};

/// Pooled result of one backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Starting balance
    pub initial_balance: Decimal,
    /// Balance after the last settled event
    pub final_balance: Decimal,
    /// Positions closed at their take-profit
    pub tp_count: usize,
    /// Positions closed at their stop-loss
    pub sl_count: usize,
    /// Candle channels analyzed
    pub channels: usize,
    /// Transactions handed to the ledger
    pub matched_transactions: usize,
    /// Balance/margin snapshots in event order
    pub trace: Vec<BalancePoint>,
}

impl BacktestSummary {
    pub(crate) fn new(
        initial_balance: Decimal,
        channels: usize,
        matched_transactions: usize,
        report: LedgerReport,
    ) -> Self {
        Self {
            initial_balance,
            final_balance: report.final_balance(initial_balance),
            tp_count: report.tp_count,
            sl_count: report.sl_count,
            channels,
            matched_transactions,
            trace: report.trace,
        }
    }

    /// Net USD profit over the run.
    pub fn net_profit(&self) -> Decimal {
        self.final_balance - self.initial_balance
    }

    /// Fraction of settled positions that hit their take-profit, if any
    /// settled at all.
    pub fn win_rate(&self) -> Option<Decimal> {
        let settled = self.tp_count + self.sl_count;
        if settled == 0 {
            return None;
        }
        Some(Decimal::from(self.tp_count as u64) / Decimal::from(settled as u64))
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for BacktestSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════════")?;
        writeln!(f, "              BACKTEST SUMMARY")?;
        writeln!(f, "═══════════════════════════════════════════")?;
        writeln!(f, "  Initial Balance:   ${}", self.initial_balance)?;
        writeln!(f, "  Final Balance:     ${}", self.final_balance)?;
        writeln!(f, "  Net Profit:        ${}", self.net_profit())?;
        writeln!(f, "  Take-Profits:      {}", self.tp_count)?;
        writeln!(f, "  Stop-Losses:       {}", self.sl_count)?;
        match self.win_rate() {
            Some(rate) => writeln!(f, "  Win Rate:          {}%", rate * Decimal::from(100))?,
            None => writeln!(f, "  Win Rate:          n/a")?,
        }
        writeln!(f, "  Channels:          {}", self.channels)?;
        writeln!(f, "  Transactions:      {}", self.matched_transactions)?;
        writeln!(f, "  Trace Points:      {}", self.trace.len())?;
        write!(f, "═══════════════════════════════════════════")
    }
}

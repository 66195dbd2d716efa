//! Portfolio ledger: margin-aware transaction replay.

use std::collections::BTreeSet;

use fxlab_core::{
    error::LedgerError,
    traits::FeeModel,
    types::Transaction,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One lot is 100k base units.
const LOT_SIZE: Decimal = rust_decimal_macros::dec!(100000);

/// Ledger replay parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Starting balance in USD
    pub initial_balance: Decimal,
    /// Fraction of the balance risked per position
    pub risk_fraction: Decimal,
    /// Notional-to-margin leverage ratio
    pub leverage: Decimal,
}

impl LedgerConfig {
    fn validate(&self) -> Result<(), LedgerError> {
        if self.initial_balance <= Decimal::ZERO {
            return Err(LedgerError::InvalidParameter(
                "initial balance must be positive".into(),
            ));
        }
        if self.risk_fraction <= Decimal::ZERO || self.risk_fraction >= Decimal::ONE {
            return Err(LedgerError::InvalidParameter(
                "risk fraction must be in (0, 1)".into(),
            ));
        }
        if self.leverage <= Decimal::ZERO {
            return Err(LedgerError::InvalidParameter(
                "leverage must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// One point of the balance/margin trace, recorded at every settled open and
/// close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub timestamp: i64,
    pub balance: Decimal,
    pub used_margin: Decimal,
}

/// Complete observable output of one ledger replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Positions closed at their take-profit
    pub tp_count: usize,
    /// Positions closed at their stop-loss
    pub sl_count: usize,
    /// Balance/margin snapshots in event order
    pub trace: Vec<BalancePoint>,
}

impl LedgerReport {
    /// Final balance, or the start balance if nothing settled.
    pub fn final_balance(&self, initial_balance: Decimal) -> Decimal {
        self.trace
            .last()
            .map(|point| point.balance)
            .unwrap_or(initial_balance)
    }
}

/// Replay resolved transactions through margin and risk admission control.
///
/// Transactions are sorted by open timestamp (input order breaks ties) and
/// replayed over the merged set of open and close timestamps. At each
/// timestamp closes settle before opens, so margin released by a close is
/// available to an open at the same instant. A rejected open is skipped for
/// good; it is never retried when margin later frees up.
pub fn replay(
    transactions: &[Transaction],
    config: &LedgerConfig,
    fees: &dyn FeeModel,
) -> Result<LedgerReport, LedgerError> {
    if transactions.is_empty() {
        return Err(LedgerError::NoTransactions);
    }
    config.validate()?;

    let mut ordered: Vec<Transaction> = transactions.to_vec();
    ordered.sort_by_key(|tx| tx.open_timestamp);

    let mut timestamps = BTreeSet::new();
    for tx in &ordered {
        timestamps.insert(tx.open_timestamp);
        timestamps.insert(tx.close_timestamp);
    }

    let mut balance = config.initial_balance;
    let mut used_margin = Decimal::ZERO;
    let mut pending: Vec<Transaction> = Vec::new();
    let mut report = LedgerReport {
        tp_count: 0,
        sl_count: 0,
        trace: Vec::new(),
    };
    // Index of the next candidate open in `ordered`.
    let mut next_open = 0;

    for &timestamp in &timestamps {
        // Closes first: margin released here funds opens at this instant.
        let mut still_open = Vec::with_capacity(pending.len());
        for tx in pending {
            if tx.close_timestamp != timestamp {
                still_open.push(tx);
                continue;
            }
            settle_close(&tx, fees, &mut balance, &mut used_margin);
            if tx.outcome.is_take_profit() {
                report.tp_count += 1;
            } else {
                report.sl_count += 1;
            }
            report.trace.push(BalancePoint {
                timestamp,
                balance,
                used_margin,
            });
        }
        pending = still_open;

        while next_open < ordered.len() && ordered[next_open].open_timestamp == timestamp {
            let tx = &ordered[next_open];
            next_open += 1;

            let risk_amt = (balance * config.risk_fraction)
                .max(config.initial_balance * config.risk_fraction);
            let free_margin = balance - used_margin;
            let committed_risk: Decimal = pending.iter().map(|p| p.risk_usd).sum();

            if free_margin - committed_risk < risk_amt {
                warn!(
                    %timestamp,
                    symbol = %tx.symbol,
                    %free_margin,
                    %committed_risk,
                    %risk_amt,
                    "open rejected: insufficient free margin"
                );
                continue;
            }
            if pending.iter().any(|p| p.same_order(tx)) {
                warn!(
                    %timestamp,
                    symbol = %tx.symbol,
                    entry = %tx.entry,
                    "open rejected: duplicate economic order"
                );
                continue;
            }

            let mut admitted = tx.clone();
            size_position(&mut admitted, risk_amt, config.leverage);
            used_margin += admitted.reserved_margin_usd;
            balance += fees.commission(admitted.notional_usd);
            pending.push(admitted);
            report.trace.push(BalancePoint {
                timestamp,
                balance,
                used_margin,
            });
        }
    }

    Ok(report)
}

/// Fill the sizing fields of an admitted transaction.
///
/// The risk amount is converted to the quote currency (by the entry price
/// unless the pair is already USD-quoted) before dividing by the stop
/// distance; the notional comes back the other way.
fn size_position(tx: &mut Transaction, risk_amt: Decimal, leverage: Decimal) {
    let risk_quote = if tx.symbol.is_usd_quoted() {
        risk_amt
    } else {
        risk_amt * tx.entry
    };
    let stop_distance = (tx.stop_loss - tx.entry).abs();
    let size = risk_quote / stop_distance;
    let notional_usd = if tx.symbol.is_usd_quoted() {
        size * tx.entry
    } else {
        size
    };

    tx.size = size;
    tx.risk_usd = risk_amt;
    tx.notional_usd = notional_usd;
    tx.reserved_margin_usd = notional_usd / leverage;
}

/// Settle one close: realize P/L, charge fees, release margin.
fn settle_close(
    tx: &Transaction,
    fees: &dyn FeeModel,
    balance: &mut Decimal,
    used_margin: &mut Decimal,
) {
    let fill = tx.fill_price();
    let pnl_quote = tx.size * (fill - tx.entry).abs();
    let pnl_usd = if tx.symbol.is_usd_quoted() {
        pnl_quote
    } else {
        pnl_quote / fill
    };

    if tx.outcome.is_take_profit() {
        *balance += pnl_usd;
    } else {
        *balance -= pnl_usd;
    }
    *balance += fees.commission(tx.notional_usd);
    *balance += fees.swap(
        tx.symbol,
        tx.size / LOT_SIZE,
        tx.open_timestamp,
        tx.close_timestamp,
        tx.direction,
    );
    *used_margin = (*used_margin - tx.reserved_margin_usd).max(Decimal::ZERO);
}

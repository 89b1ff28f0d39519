//! Balance events - typed balance-change notifications
//!
//! Successful account operations return these instead of printing. The
//! caller (CLI, test harness) decides what to do with them; the core never
//! writes to stdout.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// What happened to the balance
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BalanceEventKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
    Inquiry,
}

/// One observed balance change (or read) on a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceEvent {
    /// Owner of the affected account
    pub owner: String,
    /// Operation that produced this event
    pub kind: BalanceEventKind,
    /// Amount moved; zero for inquiries
    pub amount: Decimal,
    /// Balance after the operation
    pub balance_after: Decimal,
    /// When the operation completed
    pub at: DateTime<Utc>,
}

impl BalanceEvent {
    pub(crate) fn new(
        owner: &str,
        kind: BalanceEventKind,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        Self {
            owner: owner.to_string(),
            kind,
            amount,
            balance_after,
            at: Utc::now(),
        }
    }
}

impl fmt::Display for BalanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BalanceEventKind::Inquiry => {
                write!(f, "[{}] balance: {}", self.owner, self.balance_after)
            }
            _ => write!(
                f,
                "[{}] {}: {} (balance: {})",
                self.owner, self.kind, self.amount, self.balance_after
            ),
        }
    }
}

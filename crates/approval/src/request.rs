//! Requests - executable banking operations
//!
//! A request is inert data: one or two account handles plus the operands
//! needed to execute. It carries no authorization logic; the chain decides
//! who may run it, then calls [`Request::execute`].

use std::fmt;

use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};
use tierbank_ledger::{AccountRef, BalanceEvent, LedgerError};

/// The closed set of request kinds, used by authority policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RequestKind {
    Deposit,
    Withdraw,
    Transfer,
    BalanceInquiry,
}

/// An executable banking request.
///
/// Amounts are deliberately unvalidated here: a request with a non-positive
/// amount can be constructed and observed, but fails deterministically with
/// [`LedgerError::InvalidAmount`] when executed.
#[derive(Debug, Clone)]
pub enum Request {
    Deposit {
        account: AccountRef,
        amount: Decimal,
    },
    Withdraw {
        account: AccountRef,
        amount: Decimal,
    },
    Transfer {
        source: AccountRef,
        target: AccountRef,
        amount: Decimal,
    },
    BalanceInquiry {
        account: AccountRef,
    },
}

impl Request {
    /// The kind tag, for policy dispatch
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::Deposit { .. } => RequestKind::Deposit,
            Request::Withdraw { .. } => RequestKind::Withdraw,
            Request::Transfer { .. } => RequestKind::Transfer,
            Request::BalanceInquiry { .. } => RequestKind::BalanceInquiry,
        }
    }

    /// The monetary operand; `None` for balance inquiries
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Request::Deposit { amount, .. }
            | Request::Withdraw { amount, .. }
            | Request::Transfer { amount, .. } => Some(*amount),
            Request::BalanceInquiry { .. } => None,
        }
    }

    /// Perform the underlying account mutation(s).
    ///
    /// Returns the balance events produced (two for a transfer, one
    /// otherwise). On error no account is mutated.
    pub fn execute(&self) -> Result<Vec<BalanceEvent>, LedgerError> {
        match self {
            Request::Deposit { account, amount } => Ok(vec![account.deposit(*amount)?]),
            Request::Withdraw { account, amount } => Ok(vec![account.withdraw(*amount)?]),
            Request::Transfer {
                source,
                target,
                amount,
            } => {
                let (out, inn) = source.transfer(target, *amount)?;
                Ok(vec![out, inn])
            }
            Request::BalanceInquiry { account } => Ok(vec![account.inquiry()]),
        }
    }

    /// Stable human-readable summary for audit and display.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Deposit { account, amount } => {
                write!(f, "deposit(account={}, amount={})", account.owner(), amount)
            }
            Request::Withdraw { account, amount } => {
                write!(f, "withdraw(account={}, amount={})", account.owner(), amount)
            }
            Request::Transfer {
                source,
                target,
                amount,
            } => write!(
                f,
                "transfer(from={}, to={}, amount={})",
                source.owner(),
                target.owner(),
                amount
            ),
            Request::BalanceInquiry { account } => {
                write!(f, "balance_inquiry(account={})", account.owner())
            }
        }
    }
}

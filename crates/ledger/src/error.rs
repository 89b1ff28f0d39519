//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in account operations.
///
/// Every variant is a normal, reportable outcome; nothing here is fatal.
/// A failed operation leaves all involved accounts exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be strictly positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Cannot transfer from an account to itself: {0}")]
    SameAccountTransfer(String),

    #[error("Balance overflow on account {0}")]
    BalanceOverflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientFunds {
            requested: dec!(800),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 800, available 500"
        );

        let err = LedgerError::InvalidAmount(dec!(-5));
        assert_eq!(err.to_string(), "Amount must be strictly positive, got -5");
    }
}

//! Amount - Non-negative decimal wrapper for balances
//!
//! A TierBank balance can never be negative. Rather than checking that after
//! every mutation, the invariant lives in the type: an `Amount` holds a
//! `Decimal` that is `>= 0` from construction onward, and the only way to
//! shrink one is `checked_sub`, which refuses to cross zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing an [`Amount`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative decimal amount.
///
/// # Invariant
/// The inner value is always `>= 0`, enforced by the constructor and by
/// every arithmetic helper.
///
/// # Example
/// ```
/// use tierbank_core::Amount;
/// use rust_decimal::Decimal;
///
/// let balance = Amount::new(Decimal::new(10_000, 0)).unwrap();
/// assert_eq!(balance.value(), Decimal::new(10_000, 0));
///
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new `Amount`, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::Negative(value))
        } else {
            Ok(Self(value))
        }
    }

    /// The inner decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True if the amount is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add another amount; `None` on decimal overflow.
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Subtract another amount; `None` if the result would be negative.
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

//! TierBank Core - Domain types
//!
//! Fundamental types shared by every TierBank crate:
//! - `Amount`: Non-negative decimal wrapper for balances and ceilings

pub mod amount;

pub use amount::{Amount, AmountError};

//! TierBank Ledger - In-memory accounts
//!
//! The mutable half of TierBank. An [`Account`] owns a balance behind a
//! per-account lock; every mutation goes through `deposit`, `withdraw` or
//! `transfer` and yields a typed [`BalanceEvent`] the caller can display or
//! log. Storage is in-memory only; durability belongs to a collaborator.
//!
//! # Key Types
//! - `Account`: owner identity plus a locked, non-negative balance
//! - `AccountRef`: shared handle (`Arc<Account>`) used by requests
//! - `BalanceEvent`: value describing one balance change
//! - `LedgerError`: the full failure taxonomy for account operations

pub mod account;
pub mod error;
pub mod event;

pub use account::{Account, AccountRef};
pub use error::LedgerError;
pub use event::{BalanceEvent, BalanceEventKind};
pub use tierbank_core::{Amount, AmountError};

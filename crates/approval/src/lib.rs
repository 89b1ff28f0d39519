//! TierBank Approval - tiered authorization for banking requests
//!
//! Every banking operation is expressed as a [`Request`] and submitted to a
//! [`Chain`] of [`Authority`] tiers. Each authority approves and executes
//! requests inside its monetary band and escalates everything larger; a
//! request that exhausts the chain comes back as a [`Verdict::Rejected`]
//! value, never a fault.
//!
//! ```text
//! Request ──► Teller ──► Assistant Manager ──► Manager ──► Director
//!             (0,500]    (500,2500]            (2500,10000] (10000,∞)
//! ```
//!
//! Bands are exclusive at the bottom and inclusive at the top: an amount
//! exactly equal to a ceiling belongs to the lower authority.

pub mod authority;
pub mod chain;
pub mod config;
pub mod request;
pub mod verdict;

pub use authority::Authority;
pub use chain::{Chain, ChainError};
pub use config::{ChainConfig, Tier};
pub use request::{Request, RequestKind};
pub use verdict::Verdict;

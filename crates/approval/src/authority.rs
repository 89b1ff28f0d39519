//! Authority - one tier in the escalation chain
//!
//! Each authority owns a monetary band `(floor, ceiling]` and its successor
//! link. Coverage rules:
//!
//! - Deposits and balance inquiries belong to the head authority (the
//!   lowest tier) regardless of amount and never escalate.
//! - Withdrawals and transfers belong to exactly one band. The bottom of a
//!   band is exclusive and the top inclusive, so an amount equal to a
//!   ceiling is approved by the lower authority, never escalated.
//! - The head has no lower bound, so a non-positive amount reaches
//!   execution there and fails with `InvalidAmount` instead of walking the
//!   chain.
//!
//! An uncovered request is forwarded unchanged to the successor; with no
//! successor left, the verdict is a terminal rejection.

use rust_decimal::Decimal;
use tierbank_ledger::LedgerError;

use crate::request::Request;
use crate::verdict::Verdict;

/// A single approval authority, owning its successor.
#[derive(Debug)]
pub struct Authority {
    name: String,
    /// Exclusive lower bound of the band; zero only at the head
    floor: Decimal,
    /// Inclusive upper bound; `None` means unbounded
    ceiling: Option<Decimal>,
    next: Option<Box<Authority>>,
}

impl Authority {
    pub(crate) fn new(
        name: String,
        floor: Decimal,
        ceiling: Option<Decimal>,
        next: Option<Box<Authority>>,
    ) -> Self {
        Self {
            name,
            floor,
            ceiling,
            next,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exclusive lower bound of this authority's band
    pub fn floor(&self) -> Decimal {
        self.floor
    }

    /// Inclusive ceiling; `None` for an unbounded terminal tier
    pub fn ceiling(&self) -> Option<Decimal> {
        self.ceiling
    }

    /// The next authority in the chain, if any
    pub fn next(&self) -> Option<&Authority> {
        self.next.as_deref()
    }

    /// Attempt to handle `request`: execute it if this authority's policy
    /// covers it, otherwise escalate. Execution failures surface as `Err`
    /// and are never forwarded; escalation is about authorization bands,
    /// not recovery.
    pub fn handle(&self, request: &Request) -> Result<Verdict, LedgerError> {
        if self.covers(request) {
            tracing::debug!(authority = %self.name, request = %request, "approving request");
            let events = request.execute()?;
            return Ok(Verdict::Approved {
                authority: self.name.clone(),
                events,
            });
        }

        match &self.next {
            Some(next) => {
                tracing::debug!(
                    authority = %self.name,
                    next = %next.name,
                    request = %request,
                    "escalating request"
                );
                next.handle(request)
            }
            None => {
                tracing::warn!(authority = %self.name, request = %request, "chain exhausted");
                Ok(Verdict::Rejected {
                    reason: format!("no authority is permitted to approve {request}"),
                })
            }
        }
    }

    fn is_head(&self) -> bool {
        self.floor.is_zero()
    }

    fn covers(&self, request: &Request) -> bool {
        match request {
            Request::Deposit { .. } | Request::BalanceInquiry { .. } => self.is_head(),
            Request::Withdraw { amount, .. } | Request::Transfer { amount, .. } => {
                self.in_band(*amount)
            }
        }
    }

    /// Band membership: `(floor, ceiling]`, with the head accepting
    /// everything at or below its ceiling.
    fn in_band(&self, amount: Decimal) -> bool {
        let above_floor = self.is_head() || amount > self.floor;
        let within_ceiling = self.ceiling.map_or(true, |c| amount <= c);
        above_floor && within_ceiling
    }
}

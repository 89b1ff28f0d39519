//! Verdicts - the chain's answer to a request

use tierbank_ledger::BalanceEvent;

/// Outcome of submitting a request to the approval chain.
///
/// `Rejected` is the normal chain-exhausted outcome: no authority's policy
/// covered the request. Execution failures are not verdicts; they surface
/// as `Err(LedgerError)` from `Chain::handle`.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// An authority approved and executed the request.
    Approved {
        /// Name of the authority that handled it, for audit
        authority: String,
        /// Balance events produced by execution
        events: Vec<BalanceEvent>,
    },

    /// The chain was exhausted without any authority covering the request.
    Rejected { reason: String },
}

impl Verdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected { .. })
    }

    /// Name of the approving authority, if any
    pub fn handled_by(&self) -> Option<&str> {
        match self {
            Verdict::Approved { authority, .. } => Some(authority),
            Verdict::Rejected { .. } => None,
        }
    }

    /// Events produced by execution; empty for rejections
    pub fn events(&self) -> &[BalanceEvent] {
        match self {
            Verdict::Approved { events, .. } => events,
            Verdict::Rejected { .. } => &[],
        }
    }
}

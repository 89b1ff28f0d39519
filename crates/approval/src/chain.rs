//! Chain - validated construction and submission entry point
//!
//! The chain constructor takes an ordered tier table and wires the
//! authority links internally. Ceilings must be strictly positive and
//! strictly increasing, and an unbounded tier may only sit in last
//! position; together the bands partition `(0, ∞)` with no gaps or
//! overlaps. Construction either yields a fully-linked chain or a typed
//! error - callers never observe a half-built one.

use rust_decimal::Decimal;
use thiserror::Error;
use tierbank_ledger::LedgerError;

use crate::authority::Authority;
use crate::config::ChainConfig;
use crate::request::Request;
use crate::verdict::Verdict;

/// Errors raised while building a chain from a tier table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Approval chain needs at least one tier")]
    Empty,

    #[error("Tier {tier} has a non-positive ceiling: {ceiling}")]
    NonPositiveCeiling { tier: String, ceiling: Decimal },

    #[error("Tier {tier} ceiling {ceiling} does not exceed the previous ceiling {previous}")]
    NonMonotonicCeiling {
        tier: String,
        ceiling: Decimal,
        previous: Decimal,
    },

    #[error("Tier {tier} is unreachable behind an unbounded tier")]
    UnreachableTier { tier: String },
}

/// The ordered escalation chain. Stateless after construction and safe to
/// share across threads; only account mutation needs synchronization.
#[derive(Debug)]
pub struct Chain {
    head: Authority,
}

impl Chain {
    /// Build a chain from an ordered tier table, lowest tier first.
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        let tiers = config.tiers;
        if tiers.is_empty() {
            return Err(ChainError::Empty);
        }

        // Validate the ceiling table and derive each band's floor: the
        // previous tier's ceiling, zero at the head.
        let mut floors = Vec::with_capacity(tiers.len());
        let mut previous: Option<Decimal> = None;
        let mut unbounded = false;
        for tier in &tiers {
            if unbounded {
                return Err(ChainError::UnreachableTier {
                    tier: tier.name.clone(),
                });
            }
            floors.push(previous.unwrap_or(Decimal::ZERO));
            match tier.ceiling {
                Some(ceiling) if ceiling <= Decimal::ZERO => {
                    return Err(ChainError::NonPositiveCeiling {
                        tier: tier.name.clone(),
                        ceiling,
                    });
                }
                Some(ceiling) => {
                    if let Some(previous) = previous {
                        if ceiling <= previous {
                            return Err(ChainError::NonMonotonicCeiling {
                                tier: tier.name.clone(),
                                ceiling,
                                previous,
                            });
                        }
                    }
                    previous = Some(ceiling);
                }
                None => unbounded = true,
            }
        }

        // Wire back-to-front so each authority owns its successor.
        let mut linked = tiers.into_iter().zip(floors).rev();
        let (last, last_floor) = linked.next().ok_or(ChainError::Empty)?;
        let mut head = Authority::new(last.name, last_floor, last.ceiling, None);
        for (tier, floor) in linked {
            head = Authority::new(tier.name, floor, tier.ceiling, Some(Box::new(head)));
        }

        Ok(Self { head })
    }

    /// The classic four-tier branch-office chain.
    pub fn standard() -> Self {
        Self::new(ChainConfig::default()).expect("default tier table is valid")
    }

    /// Submit a request to the head of the chain.
    pub fn handle(&self, request: &Request) -> Result<Verdict, LedgerError> {
        self.head.handle(request)
    }

    /// Walk the authorities in escalation order.
    pub fn authorities(&self) -> impl Iterator<Item = &Authority> {
        std::iter::successors(Some(&self.head), |authority| authority.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tier;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_table_rejected() {
        let result = Chain::new(ChainConfig { tiers: vec![] });
        assert_eq!(result.unwrap_err(), ChainError::Empty);
    }

    #[test]
    fn test_non_positive_ceiling_rejected() {
        let result = Chain::new(ChainConfig {
            tiers: vec![Tier::capped("Teller", dec!(0))],
        });
        assert!(matches!(
            result,
            Err(ChainError::NonPositiveCeiling { .. })
        ));
    }

    #[test]
    fn test_non_monotonic_ceilings_rejected() {
        let result = Chain::new(ChainConfig {
            tiers: vec![
                Tier::capped("Teller", dec!(500)),
                Tier::capped("Manager", dec!(500)),
            ],
        });
        assert_eq!(
            result.unwrap_err(),
            ChainError::NonMonotonicCeiling {
                tier: "Manager".to_string(),
                ceiling: dec!(500),
                previous: dec!(500),
            }
        );
    }

    #[test]
    fn test_tier_behind_unbounded_rejected() {
        let result = Chain::new(ChainConfig {
            tiers: vec![
                Tier::unbounded("Director"),
                Tier::capped("Teller", dec!(500)),
            ],
        });
        assert_eq!(
            result.unwrap_err(),
            ChainError::UnreachableTier {
                tier: "Teller".to_string(),
            }
        );
    }

    #[test]
    fn test_standard_chain_wiring() {
        let chain = Chain::standard();
        let bands: Vec<_> = chain
            .authorities()
            .map(|a| (a.name().to_string(), a.floor(), a.ceiling()))
            .collect();

        assert_eq!(
            bands,
            vec![
                ("Teller".to_string(), dec!(0), Some(dec!(500))),
                ("Assistant Manager".to_string(), dec!(500), Some(dec!(2500))),
                ("Manager".to_string(), dec!(2500), Some(dec!(10000))),
                ("Director".to_string(), dec!(10000), None),
            ]
        );
    }

    #[test]
    fn test_single_unbounded_tier_is_valid() {
        let chain = Chain::new(ChainConfig {
            tiers: vec![Tier::unbounded("Director")],
        })
        .unwrap();
        assert_eq!(chain.authorities().count(), 1);
    }
}

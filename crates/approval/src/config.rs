//! Tier configuration - the caller-facing shape of an approval chain
//!
//! A chain is described as an ordered list of tiers, lowest first. The
//! chain constructor wires the actual authority links; callers never see a
//! partially-linked node.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One approval tier: a name and an inclusive ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Display name, reported in verdicts for audit
    pub name: String,

    /// Inclusive upper bound of this tier's band; `None` means the tier
    /// approves any amount (only legal in last position).
    pub ceiling: Option<Decimal>,
}

impl Tier {
    /// A tier with an inclusive approval ceiling
    pub fn capped(name: impl Into<String>, ceiling: Decimal) -> Self {
        Self {
            name: name.into(),
            ceiling: Some(ceiling),
        }
    }

    /// A terminal tier that approves any amount
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ceiling: None,
        }
    }
}

/// Ordered tier table for building a [`crate::Chain`], lowest tier first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub tiers: Vec<Tier>,
}

impl Default for ChainConfig {
    /// The classic branch-office table:
    /// Teller ≤ 500, Assistant Manager ≤ 2500, Manager ≤ 10000, Director ∞.
    fn default() -> Self {
        Self {
            tiers: vec![
                Tier::capped("Teller", Decimal::new(500, 0)),
                Tier::capped("Assistant Manager", Decimal::new(2_500, 0)),
                Tier::capped("Manager", Decimal::new(10_000, 0)),
                Tier::unbounded("Director"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_table() {
        let config = ChainConfig::default();
        assert_eq!(config.tiers.len(), 4);
        assert_eq!(config.tiers[0], Tier::capped("Teller", dec!(500)));
        assert_eq!(
            config.tiers[1],
            Tier::capped("Assistant Manager", dec!(2500))
        );
        assert_eq!(config.tiers[2], Tier::capped("Manager", dec!(10000)));
        assert_eq!(config.tiers[3], Tier::unbounded("Director"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ChainConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChainConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unbounded_tier_serializes_as_null_ceiling() {
        let json = serde_json::to_string(&Tier::unbounded("Director")).unwrap();
        assert_eq!(json, r#"{"name":"Director","ceiling":null}"#);
    }
}

//! CLI commands

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use tierbank_approval::{Chain, ChainConfig, Request, Verdict};
use tierbank_core::Amount;
use tierbank_ledger::Account;

/// Build the chain from a JSON tier table, or the standard four tiers.
pub fn load_chain(path: Option<&Path>) -> Result<Chain, anyhow::Error> {
    let config = match path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ChainConfig::default(),
    };
    Ok(Chain::new(config)?)
}

/// Print each authority's band.
pub fn bands(chain: &Chain) {
    for authority in chain.authorities() {
        match authority.ceiling() {
            Some(ceiling) => println!(
                "{:<20} ({}, {}]",
                authority.name(),
                authority.floor(),
                ceiling
            ),
            None => println!("{:<20} ({}, ∞)", authority.name(), authority.floor()),
        }
    }
}

/// Replay the branch-office scenario and display every outcome.
pub fn demo(chain: &Chain) -> Result<(), anyhow::Error> {
    let alice = Account::new("Alice", Amount::new(Decimal::new(40_000, 0))?);
    let bob = Account::new("Bob", Amount::new(Decimal::new(10_000, 0))?);

    let requests = vec![
        Request::BalanceInquiry {
            account: alice.clone(),
        },
        Request::Deposit {
            account: alice.clone(),
            amount: Decimal::new(2_000, 0),
        },
        Request::Withdraw {
            account: bob.clone(),
            amount: Decimal::new(800, 0),
        },
        Request::Withdraw {
            account: bob.clone(),
            amount: Decimal::new(5_000, 0),
        },
        Request::Transfer {
            source: alice.clone(),
            target: bob.clone(),
            amount: Decimal::new(12_000, 0),
        },
        Request::Transfer {
            source: alice.clone(),
            target: bob.clone(),
            amount: Decimal::new(700, 0),
        },
        Request::Withdraw {
            account: alice.clone(),
            amount: Decimal::new(20_000, 0),
        },
    ];

    for request in requests {
        println!(">> {}", request.describe());
        match chain.handle(&request) {
            Ok(Verdict::Approved { authority, events }) => {
                println!("   approved by {authority}");
                for event in events {
                    println!("   {event}");
                }
            }
            Ok(Verdict::Rejected { reason }) => println!("   rejected: {reason}"),
            Err(err) => println!("   failed: {err}"),
        }
    }

    Ok(())
}

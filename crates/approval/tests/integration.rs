//! End-to-end scenarios through the standard approval chain

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tierbank_approval::{Chain, ChainConfig, Request, Tier, Verdict};
use tierbank_ledger::{Account, AccountRef, Amount, LedgerError};

fn account(owner: &str, balance: Decimal) -> AccountRef {
    Account::new(owner, Amount::new(balance).unwrap())
}

fn withdraw(account: &AccountRef, amount: Decimal) -> Request {
    Request::Withdraw {
        account: account.clone(),
        amount,
    }
}

#[test]
fn test_branch_office_scenario() {
    let chain = Chain::standard();
    let alice = account("Alice", dec!(40000));
    let bob = account("Bob", dec!(10000));

    // Balance inquiry: lowest tier, read-only.
    let verdict = chain
        .handle(&Request::BalanceInquiry {
            account: alice.clone(),
        })
        .unwrap();
    assert_eq!(verdict.handled_by(), Some("Teller"));
    assert_eq!(verdict.events()[0].balance_after, dec!(40000));

    // Deposit of any size is a Teller matter.
    let verdict = chain
        .handle(&Request::Deposit {
            account: alice.clone(),
            amount: dec!(2000),
        })
        .unwrap();
    assert_eq!(verdict.handled_by(), Some("Teller"));
    assert_eq!(alice.balance().value(), dec!(42000));

    // 800 sits in (500, 2500]: Assistant Manager.
    let verdict = chain.handle(&withdraw(&bob, dec!(800))).unwrap();
    assert_eq!(verdict.handled_by(), Some("Assistant Manager"));
    assert_eq!(bob.balance().value(), dec!(9200));

    // 5000 sits in (2500, 10000]: Manager.
    let verdict = chain.handle(&withdraw(&bob, dec!(5000))).unwrap();
    assert_eq!(verdict.handled_by(), Some("Manager"));
    assert_eq!(bob.balance().value(), dec!(4200));

    // 12000 exceeds the Manager ceiling of 10000: Director, not Manager.
    let verdict = chain
        .handle(&Request::Transfer {
            source: alice.clone(),
            target: bob.clone(),
            amount: dec!(12000),
        })
        .unwrap();
    assert_eq!(verdict.handled_by(), Some("Director"));
    assert_eq!(alice.balance().value(), dec!(30000));
    assert_eq!(bob.balance().value(), dec!(16200));

    // 700 exceeds the Teller ceiling of 500: Assistant Manager.
    let verdict = chain
        .handle(&Request::Transfer {
            source: alice.clone(),
            target: bob.clone(),
            amount: dec!(700),
        })
        .unwrap();
    assert_eq!(verdict.handled_by(), Some("Assistant Manager"));

    // 20000 from Alice: Director.
    let verdict = chain.handle(&withdraw(&alice, dec!(20000))).unwrap();
    assert_eq!(verdict.handled_by(), Some("Director"));
    assert_eq!(alice.balance().value(), dec!(9300));
}

#[test]
fn test_worked_example_balances() {
    // The literal numbers from the branch-office table, run in isolation.
    let chain = Chain::standard();

    let bob = account("Bob", dec!(10000));
    let verdict = chain.handle(&withdraw(&bob, dec!(800))).unwrap();
    assert_eq!(verdict.handled_by(), Some("Assistant Manager"));
    assert_eq!(bob.balance().value(), dec!(9200));

    let alice = account("Alice", dec!(40000));
    chain
        .handle(&Request::Deposit {
            account: alice.clone(),
            amount: dec!(2000),
        })
        .unwrap();
    let verdict = chain.handle(&withdraw(&alice, dec!(20000))).unwrap();
    assert_eq!(verdict.handled_by(), Some("Director"));
    assert_eq!(alice.balance().value(), dec!(22000));
}

#[test]
fn test_band_boundaries_are_inclusive_at_the_top() {
    let chain = Chain::standard();
    let cases = [
        (dec!(0.01), "Teller"),
        (dec!(500), "Teller"),
        (dec!(500.01), "Assistant Manager"),
        (dec!(2500), "Assistant Manager"),
        (dec!(2500.01), "Manager"),
        (dec!(10000), "Manager"),
        (dec!(10000.01), "Director"),
        (dec!(1000000), "Director"),
    ];

    for (amount, expected) in cases {
        let rich = account("Rich", dec!(10000000));
        let verdict = chain.handle(&withdraw(&rich, amount)).unwrap();
        assert_eq!(
            verdict.handled_by(),
            Some(expected),
            "amount {amount} must be handled by {expected}"
        );
    }
}

#[test]
fn test_transfer_uses_the_same_bands_as_withdrawal() {
    let chain = Chain::standard();
    let cases = [
        (dec!(500), "Teller"),
        (dec!(700), "Assistant Manager"),
        (dec!(2500), "Assistant Manager"),
        (dec!(12000), "Director"),
    ];

    for (amount, expected) in cases {
        let alice = account("Alice", dec!(100000));
        let bob = account("Bob", dec!(0));
        let verdict = chain
            .handle(&Request::Transfer {
                source: alice,
                target: bob,
                amount,
            })
            .unwrap();
        assert_eq!(
            verdict.handled_by(),
            Some(expected),
            "transfer of {amount} must be handled by {expected}"
        );
    }
}

#[test]
fn test_transfer_conservation_through_the_chain() {
    let chain = Chain::standard();
    let alice = account("Alice", dec!(42000));
    let bob = account("Bob", dec!(9200));
    let total = alice.balance().value() + bob.balance().value();

    for amount in [dec!(700), dec!(1200), dec!(9000), dec!(12000)] {
        chain
            .handle(&Request::Transfer {
                source: alice.clone(),
                target: bob.clone(),
                amount,
            })
            .unwrap();
        assert_eq!(alice.balance().value() + bob.balance().value(), total);
    }
}

#[test]
fn test_bounded_chain_yields_terminal_rejection() {
    let chain = Chain::new(ChainConfig {
        tiers: vec![
            Tier::capped("Teller", dec!(500)),
            Tier::capped("Manager", dec!(2500)),
        ],
    })
    .unwrap();
    let bob = account("Bob", dec!(10000));

    let verdict = chain.handle(&withdraw(&bob, dec!(5000))).unwrap();

    assert!(matches!(verdict, Verdict::Rejected { .. }));
    assert_eq!(bob.balance().value(), dec!(10000));
}

#[test]
fn test_invalid_amount_surfaces_without_mutation() {
    let chain = Chain::standard();
    let bob = account("Bob", dec!(10000));

    let result = chain.handle(&withdraw(&bob, dec!(-5)));

    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    assert_eq!(bob.balance().value(), dec!(10000));
}

#[test]
fn test_insufficient_funds_surfaces_without_mutation() {
    let chain = Chain::standard();
    let bob = account("Bob", dec!(10000));

    let result = chain.handle(&withdraw(&bob, dec!(10001)));

    assert!(matches!(
        result,
        Err(LedgerError::InsufficientFunds { .. })
    ));
    assert_eq!(bob.balance().value(), dec!(10000));
}

#[test]
fn test_chain_is_shareable_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let chain = Arc::new(Chain::standard());
    let alice = account("Alice", dec!(50000));
    let bob = account("Bob", dec!(50000));
    let total = dec!(100000);

    let mut handles = Vec::new();
    for i in 0..4 {
        let chain = chain.clone();
        let (from, to) = if i % 2 == 0 {
            (alice.clone(), bob.clone())
        } else {
            (bob.clone(), alice.clone())
        };
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let request = Request::Transfer {
                    source: from.clone(),
                    target: to.clone(),
                    amount: dec!(300),
                };
                // InsufficientFunds is an acceptable outcome under
                // contention; partial moves are not.
                let _ = chain.handle(&request);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(alice.balance().value() + bob.balance().value(), total);
}

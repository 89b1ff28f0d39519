//! Account - the mutable ledger entity
//!
//! An account pairs an owner identity with a balance behind a per-account
//! lock. Accounts are handed around as [`AccountRef`] (`Arc<Account>`), so a
//! request can reference one or two accounts without owning their lifetime,
//! and concurrent submissions only contend on the accounts they touch.
//!
//! Transfers hold both account locks for the whole debit+credit, acquired in
//! ascending account-id order. Two opposite-direction transfers therefore
//! cannot deadlock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;
use tierbank_core::Amount;

use crate::error::LedgerError;
use crate::event::{BalanceEvent, BalanceEventKind};

/// Shared handle to an account
pub type AccountRef = Arc<Account>;

/// Process-wide account identity source; ids double as the lock order.
static NEXT_ACCOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// A single ledger account.
///
/// The balance is an [`Amount`], so it cannot go negative; operations that
/// would cross zero fail with [`LedgerError::InsufficientFunds`] and change
/// nothing.
#[derive(Debug)]
pub struct Account {
    id: u64,
    owner: String,
    balance: Mutex<Amount>,
}

impl Account {
    /// Create a new account with an initial balance.
    pub fn new(owner: impl Into<String>, initial_balance: Amount) -> AccountRef {
        Arc::new(Self {
            id: NEXT_ACCOUNT_ID.fetch_add(1, Ordering::Relaxed),
            owner: owner.into(),
            balance: Mutex::new(initial_balance),
        })
    }

    /// Process-unique account identity
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Owner identity string
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance snapshot
    pub fn balance(&self) -> Amount {
        *self.lock()
    }

    /// Read-only balance inquiry, reported as an event for the caller.
    pub fn inquiry(&self) -> BalanceEvent {
        let balance = self.lock();
        BalanceEvent::new(
            &self.owner,
            BalanceEventKind::Inquiry,
            Decimal::ZERO,
            balance.value(),
        )
    }

    /// Credit `amount` to this account.
    ///
    /// Fails with [`LedgerError::InvalidAmount`] unless `amount > 0`.
    pub fn deposit(&self, amount: Decimal) -> Result<BalanceEvent, LedgerError> {
        let credit = positive(amount)?;
        let mut balance = self.lock();
        let next = balance
            .checked_add(&credit)
            .ok_or_else(|| LedgerError::BalanceOverflow(self.owner.clone()))?;
        *balance = next;
        Ok(BalanceEvent::new(
            &self.owner,
            BalanceEventKind::Deposit,
            amount,
            next.value(),
        ))
    }

    /// Debit `amount` from this account.
    ///
    /// Fails with [`LedgerError::InvalidAmount`] unless `amount > 0`, and
    /// with [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance. On failure the balance is untouched.
    pub fn withdraw(&self, amount: Decimal) -> Result<BalanceEvent, LedgerError> {
        let debit = positive(amount)?;
        let mut balance = self.lock();
        let next = balance
            .checked_sub(&debit)
            .ok_or(LedgerError::InsufficientFunds {
                requested: amount,
                available: balance.value(),
            })?;
        *balance = next;
        Ok(BalanceEvent::new(
            &self.owner,
            BalanceEventKind::Withdrawal,
            amount,
            next.value(),
        ))
    }

    /// Move `amount` from this account to `target` as one atomic step.
    ///
    /// Validation mirrors [`Account::withdraw`], checked against the source
    /// only. Both locks are held for the debit+credit, so no observer can
    /// see the debit without the credit. Lock order is ascending account id.
    pub fn transfer(
        &self,
        target: &Account,
        amount: Decimal,
    ) -> Result<(BalanceEvent, BalanceEvent), LedgerError> {
        let moved = positive(amount)?;
        if self.id == target.id {
            return Err(LedgerError::SameAccountTransfer(self.owner.clone()));
        }

        let mut source_balance;
        let mut target_balance;
        if self.id < target.id {
            source_balance = self.lock();
            target_balance = target.lock();
        } else {
            target_balance = target.lock();
            source_balance = self.lock();
        }

        let debited = source_balance
            .checked_sub(&moved)
            .ok_or(LedgerError::InsufficientFunds {
                requested: amount,
                available: source_balance.value(),
            })?;
        let credited = target_balance
            .checked_add(&moved)
            .ok_or_else(|| LedgerError::BalanceOverflow(target.owner.clone()))?;

        *source_balance = debited;
        *target_balance = credited;

        Ok((
            BalanceEvent::new(
                &self.owner,
                BalanceEventKind::TransferOut,
                amount,
                debited.value(),
            ),
            BalanceEvent::new(
                &target.owner,
                BalanceEventKind::TransferIn,
                amount,
                credited.value(),
            ),
        ))
    }

    fn lock(&self) -> MutexGuard<'_, Amount> {
        // Balances stay valid Amounts even if a writer panicked.
        self.balance.lock().expect("account balance lock poisoned")
    }
}

/// Validate that a requested amount is strictly positive.
fn positive(amount: Decimal) -> Result<Amount, LedgerError> {
    match Amount::new(amount) {
        Ok(a) if !a.is_zero() => Ok(a),
        _ => Err(LedgerError::InvalidAmount(amount)),
    }
}

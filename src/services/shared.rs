//! Thread-safe budget handle
//!
//! Wraps a [`Budget`] in a single reader-writer lock. Each mutation holds the
//! write lock for the whole operation, so readers only ever observe a budget
//! between operations, never halfway through a spend or a move.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::LedgerResult;
use crate::models::{
    AccountId, Budget, BudgetPolicy, BudgetSummary, CategoryId, Money, PayeeId, SpendDetails,
    TransactionId,
};

/// Cloneable handle to one budget shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedBudget {
    inner: Arc<RwLock<Budget>>,
}

impl SharedBudget {
    pub fn new(budget: Budget) -> Self {
        Self {
            inner: Arc::new(RwLock::new(budget)),
        }
    }

    pub fn with_policy(policy: BudgetPolicy) -> Self {
        Self::new(Budget::with_policy(policy))
    }

    /// Run a read-only closure against a consistent view
    pub fn read<R>(&self, f: impl FnOnce(&Budget) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run a closure under the write lock; everything it does is one step to readers
    pub fn write<R>(&self, f: impl FnOnce(&mut Budget) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Cloned copy for lock-free reading
    pub fn snapshot(&self) -> Budget {
        self.inner.read().clone()
    }

    pub fn add_account(&self, name: &str) -> LedgerResult<AccountId> {
        self.inner.write().add_account(name)
    }

    pub fn add_category(&self, name: &str) -> LedgerResult<CategoryId> {
        self.inner.write().add_category(name)
    }

    pub fn add_payee(&self, name: &str) -> LedgerResult<PayeeId> {
        self.inner.write().add_payee(name)
    }

    pub fn deposit(&self, amount: Money, account_id: AccountId) -> LedgerResult<TransactionId> {
        self.inner.write().deposit(amount, account_id)
    }

    pub fn assign(&self, amount: Money, category_id: CategoryId) -> LedgerResult<()> {
        self.inner.write().assign(amount, category_id)
    }

    pub fn unassign(&self, amount: Money, category_id: CategoryId) -> LedgerResult<()> {
        self.inner.write().unassign(amount, category_id)
    }

    pub fn move_funds(&self, amount: Money, from: CategoryId, to: CategoryId) -> LedgerResult<()> {
        self.inner.write().move_funds(amount, from, to)
    }

    pub fn spend(
        &self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> LedgerResult<TransactionId> {
        self.inner.write().spend(amount, account_id, category_id)
    }

    pub fn spend_with(
        &self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
        details: SpendDetails,
    ) -> LedgerResult<TransactionId> {
        self.inner
            .write()
            .spend_with(amount, account_id, category_id, details)
    }

    pub fn total_funds(&self) -> Money {
        self.inner.read().total_funds()
    }

    pub fn unassigned_funds(&self) -> Money {
        self.inner.read().unassigned_funds()
    }

    /// Totals computed under one read lock
    pub fn summary(&self) -> BudgetSummary {
        self.inner.read().summary()
    }
}

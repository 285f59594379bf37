//! Account model
//!
//! An account is a named store of money. Its balance is the sum of the
//! transactions posted to it; the sum is cached and kept current on every
//! post, so reading the balance is O(1).

use serde::Serialize;
use std::fmt;

use super::ensure_positive;
use super::ids::{AccountId, TransactionId};
use super::money::Money;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// A financial account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: AccountId,

    name: String,

    /// Cached sum of `transactions`
    balance: Money,

    /// Append-only history
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an empty account. Name validation is the budget's job.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            balance: Money::zero(),
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Transactions in the order they were posted
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Add money to the account
    pub fn credit(&mut self, amount: Money) -> LedgerResult<TransactionId> {
        ensure_positive(amount)?;
        self.post(Transaction::inflow(amount))
    }

    /// Remove money from the account; overdrafts are rejected
    pub fn debit(&mut self, amount: Money) -> LedgerResult<TransactionId> {
        ensure_positive(amount)?;
        self.post(Transaction::outflow(amount))
    }

    /// Check that `amount` could be debited without changing anything
    pub fn check_debit(&self, amount: Money) -> LedgerResult<()> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.name.clone(),
                needed: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Append a transaction after validating it against the current balance
    pub(crate) fn post(&mut self, txn: Transaction) -> LedgerResult<TransactionId> {
        let amount = txn.amount();
        if amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        if amount.is_negative() {
            self.check_debit(-amount)?;
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow { amount })?;

        let id = txn.id();
        self.transactions.push(txn);
        self.balance = balance;
        Ok(id)
    }

    /// Recompute the balance from history
    pub fn recomputed_balance(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

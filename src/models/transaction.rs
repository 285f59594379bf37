//! Transaction model
//!
//! A transaction is an immutable record of money entering (positive amount)
//! or leaving (negative amount) an account. Accounts derive their balance
//! from the transactions they hold.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, PayeeId, TransactionId};
use super::money::Money;

/// A single entry in an account's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,

    date: NaiveDate,

    /// Positive for inflow, negative for outflow
    amount: Money,

    category_id: Option<CategoryId>,

    payee_id: Option<PayeeId>,

    #[serde(default)]
    memo: String,
}

impl Transaction {
    /// Create an inflow dated today
    pub fn inflow(amount: Money) -> Self {
        Self::new(today(), amount)
    }

    /// Create an outflow dated today; `amount` is the positive size of the outflow
    pub fn outflow(amount: Money) -> Self {
        Self::new(today(), -amount)
    }

    /// Create a transaction with a signed amount
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            category_id: None,
            payee_id: None,
            memo: String::new(),
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_payee(mut self, payee_id: Option<PayeeId>) -> Self {
        self.payee_id = payee_id;
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn payee_id(&self) -> Option<PayeeId> {
        self.payee_id
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.amount)?;
        if !self.memo.is_empty() {
            write!(f, " ({})", self.memo)?;
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

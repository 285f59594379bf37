//! Core data models for the envelope ledger
//!
//! Money, typed ids, the three entity kinds (accounts, categories, payees),
//! transactions, and the [`Budget`] aggregate that owns them all.

pub mod account;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod payee;
pub mod transaction;

pub use account::Account;
pub use budget::{Budget, BudgetPolicy, BudgetSummary, SpendDetails};
pub use category::Category;
pub use ids::{AccountId, CategoryId, PayeeId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use payee::Payee;
pub use transaction::Transaction;

use crate::error::{LedgerError, LedgerResult};

/// Reject zero and negative amounts
pub(crate) fn ensure_positive(amount: Money) -> LedgerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::NonPositiveAmount { amount })
    }
}

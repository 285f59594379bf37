//! Category model
//!
//! A category is a budget envelope: money assigned to it is "available" for
//! spending. Unlike an account, `available` may go negative, which marks the
//! category as overspent. Whether the budget allows that is decided by
//! [`BudgetPolicy`](super::budget::BudgetPolicy), not here.

use serde::Serialize;
use std::fmt;

use super::ensure_positive;
use super::ids::CategoryId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A budget category
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: CategoryId,

    name: String,

    /// Assigned and not yet spent
    available: Money,
}

impl Category {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            available: Money::zero(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn available(&self) -> Money {
        self.available
    }

    /// True once more has been taken out than was assigned
    pub fn is_overspent(&self) -> bool {
        self.available.is_negative()
    }

    /// Move money into this category
    pub fn assign(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_positive(amount)?;
        self.available = self
            .available
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow { amount })?;
        Ok(())
    }

    /// Move money out of this category. There is no floor.
    pub fn unassign(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_positive(amount)?;
        self.available = self
            .available
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow { amount })?;
        Ok(())
    }

    /// Check an unassign without applying it
    pub fn check_unassign(&self, amount: Money, allow_overspending: bool) -> LedgerResult<()> {
        ensure_positive(amount)?;
        let remaining = self
            .available
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow { amount })?;
        if remaining.is_negative() && !allow_overspending {
            return Err(LedgerError::CategoryOverdrawn {
                category: self.name.clone(),
                needed: amount,
                available: self.available,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food");
        assert_eq!(category.name(), "Food");
        assert_eq!(category.available(), Money::zero());
        assert!(!category.is_overspent());
    }

    #[test]
    fn test_assign_and_unassign() {
        let mut category = Category::new("Food");
        category.assign(Money::from_cents(10000)).unwrap();
        category.unassign(Money::from_cents(3000)).unwrap();
        assert_eq!(category.available().cents(), 7000);
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let mut category = Category::new("Food");
        category.assign(Money::from_cents(500)).unwrap();

        for cents in [0, -100] {
            let amount = Money::from_cents(cents);
            assert_eq!(
                category.assign(amount),
                Err(LedgerError::NonPositiveAmount { amount })
            );
            assert_eq!(
                category.unassign(amount),
                Err(LedgerError::NonPositiveAmount { amount })
            );
        }
        assert_eq!(category.available().cents(), 500);
    }

    #[test]
    fn test_unassign_may_go_negative() {
        let mut category = Category::new("Food");
        category.assign(Money::from_cents(500)).unwrap();
        category.unassign(Money::from_cents(800)).unwrap();
        assert_eq!(category.available().cents(), -300);
        assert!(category.is_overspent());
    }

    #[test]
    fn test_check_unassign_respects_policy() {
        let mut category = Category::new("Food");
        category.assign(Money::from_cents(500)).unwrap();

        assert!(category
            .check_unassign(Money::from_cents(800), true)
            .is_ok());
        assert!(category
            .check_unassign(Money::from_cents(500), false)
            .is_ok());
        assert_eq!(
            category.check_unassign(Money::from_cents(800), false),
            Err(LedgerError::CategoryOverdrawn {
                category: "Food".into(),
                needed: Money::from_cents(800),
                available: Money::from_cents(500),
            })
        );
        // checking never mutates
        assert_eq!(category.available().cents(), 500);
    }
}

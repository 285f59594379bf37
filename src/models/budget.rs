//! Budget aggregate
//!
//! The budget owns every account, category and payee, keeps names unique per
//! entity kind, and is the only way to run operations that touch more than one
//! entity. Composite operations (spend, move) check every precondition before
//! mutating anything, so a failed call leaves the budget exactly as it was.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::account::Account;
use super::category::Category;
use super::ensure_positive;
use super::ids::{AccountId, CategoryId, PayeeId, TransactionId};
use super::money::Money;
use super::payee::Payee;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// Rules the budget enforces beyond the per-entity invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    /// When false, unassigning more than a category holds is rejected
    pub allow_overspent_categories: bool,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            allow_overspent_categories: true,
        }
    }
}

/// Optional details attached to the transaction a spend records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendDetails {
    pub payee: Option<PayeeId>,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub memo: String,
}

/// Derived totals for a budget at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_funds: Money,
    pub assigned: Money,
    pub unassigned_funds: Money,
}

/// The aggregate root
#[derive(Debug, Clone, Default, Serialize)]
pub struct Budget {
    accounts: IndexMap<AccountId, Account>,
    categories: IndexMap<CategoryId, Category>,
    payees: IndexMap<PayeeId, Payee>,
    #[serde(skip)]
    policy: BudgetPolicy,
}

impl Budget {
    /// Create an empty budget with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BudgetPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> BudgetPolicy {
        self.policy
    }

    // ---------------------------------------------------------------------
    // Creation
    // ---------------------------------------------------------------------

    /// Add an account with a zero balance
    pub fn add_account(&mut self, name: &str) -> LedgerResult<AccountId> {
        let name = validate_name("Account", name, self.accounts.values().map(Account::name))?;
        let account = Account::new(name);
        let id = account.id();
        debug!(account = %id, name = account.name(), "account added");
        self.accounts.insert(id, account);
        Ok(id)
    }

    /// Add a category with nothing available
    pub fn add_category(&mut self, name: &str) -> LedgerResult<CategoryId> {
        let name = validate_name("Category", name, self.categories.values().map(Category::name))?;
        let category = Category::new(name);
        let id = category.id();
        debug!(category = %id, name = category.name(), "category added");
        self.categories.insert(id, category);
        Ok(id)
    }

    pub fn add_payee(&mut self, name: &str) -> LedgerResult<PayeeId> {
        let name = validate_name("Payee", name, self.payees.values().map(Payee::name))?;
        let payee = Payee::new(name);
        let id = payee.id();
        debug!(payee = %id, name = payee.name(), "payee added");
        self.payees.insert(id, payee);
        Ok(id)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Accounts in creation order
    pub fn accounts(&self) -> impl ExactSizeIterator<Item = &Account> + '_ {
        self.accounts.values()
    }

    /// Categories in creation order
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> + '_ {
        self.categories.values()
    }

    pub fn payees(&self) -> impl ExactSizeIterator<Item = &Payee> + '_ {
        self.payees.values()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn payee(&self, id: PayeeId) -> Option<&Payee> {
        self.payees.get(&id)
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        let name = name.trim();
        self.accounts.values().find(|a| a.name() == name)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.values().find(|c| c.name() == name)
    }

    pub fn payee_by_name(&self, name: &str) -> Option<&Payee> {
        let name = name.trim();
        self.payees.values().find(|p| p.name() == name)
    }

    /// Find an account by name, falling back to parsing `identifier` as an id
    pub fn find_account(&self, identifier: &str) -> LedgerResult<&Account> {
        self.account_by_name(identifier)
            .or_else(|| {
                identifier
                    .parse::<AccountId>()
                    .ok()
                    .and_then(|id| self.account(id))
            })
            .ok_or_else(|| LedgerError::account_not_found(identifier))
    }

    /// Find a category by name, falling back to parsing `identifier` as an id
    pub fn find_category(&self, identifier: &str) -> LedgerResult<&Category> {
        self.category_by_name(identifier)
            .or_else(|| {
                identifier
                    .parse::<CategoryId>()
                    .ok()
                    .and_then(|id| self.category(id))
            })
            .ok_or_else(|| LedgerError::category_not_found(identifier))
    }

    /// Find a payee by name, falling back to parsing `identifier` as an id
    pub fn find_payee(&self, identifier: &str) -> LedgerResult<&Payee> {
        self.payee_by_name(identifier)
            .or_else(|| {
                identifier
                    .parse::<PayeeId>()
                    .ok()
                    .and_then(|id| self.payee(id))
            })
            .ok_or_else(|| LedgerError::payee_not_found(identifier))
    }

    /// Sum of every account balance
    pub fn total_funds(&self) -> Money {
        clamp_cents(self.raw_totals().0)
    }

    /// Sum of every category's available amount
    pub fn assigned_funds(&self) -> Money {
        clamp_cents(self.raw_totals().1)
    }

    /// Money in accounts that no category has claimed
    pub fn unassigned_funds(&self) -> Money {
        let (total, assigned) = self.raw_totals();
        clamp_cents(total - assigned)
    }

    pub fn summary(&self) -> BudgetSummary {
        let (total, assigned) = self.raw_totals();
        BudgetSummary {
            total_funds: clamp_cents(total),
            assigned: clamp_cents(assigned),
            unassigned_funds: clamp_cents(total - assigned),
        }
    }

    /// Categories whose available amount is below zero
    pub fn overspent_categories(&self) -> Vec<&Category> {
        self.categories
            .values()
            .filter(|c| c.is_overspent())
            .collect()
    }

    /// Every transaction, grouped by account in creation order
    pub fn transactions(&self) -> impl Iterator<Item = (&Account, &Transaction)> + '_ {
        self.accounts
            .values()
            .flat_map(|a| a.transactions().iter().map(move |t| (a, t)))
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Credit an account
    pub fn deposit(&mut self, amount: Money, account_id: AccountId) -> LedgerResult<TransactionId> {
        let result = self.try_deposit(amount, account_id);
        match &result {
            Ok(txn) => debug!(account = %account_id, %amount, transaction = %txn, "deposit recorded"),
            Err(e) => warn!(account = %account_id, %amount, error = %e, "deposit rejected"),
        }
        result
    }

    fn try_deposit(&mut self, amount: Money, account_id: AccountId) -> LedgerResult<TransactionId> {
        if !self.accounts.contains_key(&account_id) {
            return Err(LedgerError::account_not_found(account_id.to_string()));
        }
        ensure_positive(amount)?;
        self.check_totals(amount, i128::from(amount.cents()), 0)?;
        self.accounts[&account_id].credit(amount)
    }

    /// Move unassigned money into a category
    pub fn assign(&mut self, amount: Money, category_id: CategoryId) -> LedgerResult<()> {
        if !self.categories.contains_key(&category_id) {
            return Err(LedgerError::category_not_found(category_id.to_string()));
        }
        ensure_positive(amount)?;
        self.check_totals(amount, 0, i128::from(amount.cents()))?;
        self.categories[&category_id].assign(amount)?;
        debug!(category = %category_id, %amount, "funds assigned");
        Ok(())
    }

    /// Move money out of a category back to unassigned
    pub fn unassign(&mut self, amount: Money, category_id: CategoryId) -> LedgerResult<()> {
        let category = self
            .category(category_id)
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;
        category.check_unassign(amount, self.policy.allow_overspent_categories)?;
        self.check_totals(amount, 0, -i128::from(amount.cents()))?;
        self.categories[&category_id].unassign(amount)?;
        debug!(category = %category_id, %amount, "funds unassigned");
        Ok(())
    }

    /// Move money from one category to another
    pub fn move_funds(
        &mut self,
        amount: Money,
        from: CategoryId,
        to: CategoryId,
    ) -> LedgerResult<()> {
        let result = self.try_move_funds(amount, from, to);
        match &result {
            Ok(()) => debug!(%from, %to, %amount, "funds moved"),
            Err(e) => warn!(%from, %to, %amount, error = %e, "move rejected"),
        }
        result
    }

    fn try_move_funds(&mut self, amount: Money, from: CategoryId, to: CategoryId) -> LedgerResult<()> {
        ensure_positive(amount)?;
        let source = self
            .category(from)
            .ok_or_else(|| LedgerError::category_not_found(from.to_string()))?;
        let target = self
            .category(to)
            .ok_or_else(|| LedgerError::category_not_found(to.to_string()))?;

        source.check_unassign(amount, self.policy.allow_overspent_categories)?;
        if from != to {
            target
                .available()
                .checked_add(amount)
                .ok_or(LedgerError::AmountOverflow { amount })?;
        }

        // Every failure the two calls below can report was checked above.
        self.categories[&from].unassign(amount)?;
        self.categories[&to].assign(amount)?;
        Ok(())
    }

    /// Spend from an account against a category
    pub fn spend(
        &mut self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> LedgerResult<TransactionId> {
        self.spend_with(amount, account_id, category_id, SpendDetails::default())
    }

    /// Spend with payee, date and memo recorded on the transaction
    ///
    /// Debits the account and unassigns the same amount from the category.
    /// Both entities (and the payee, if given) are looked up and both balance
    /// checks run before either is changed.
    pub fn spend_with(
        &mut self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
        details: SpendDetails,
    ) -> LedgerResult<TransactionId> {
        let result = self.try_spend(amount, account_id, category_id, details);
        match &result {
            Ok(txn) => debug!(
                account = %account_id,
                category = %category_id,
                %amount,
                transaction = %txn,
                "spend recorded"
            ),
            Err(e) => warn!(
                account = %account_id,
                category = %category_id,
                %amount,
                error = %e,
                "spend rejected"
            ),
        }
        result
    }

    /// Run every check a spend makes without recording anything
    ///
    /// Succeeds exactly when `spend` with the same arguments would.
    pub fn check_spend(
        &self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
    ) -> LedgerResult<()> {
        ensure_positive(amount)?;
        let account = self
            .account(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.to_string()))?;
        let category = self
            .category(category_id)
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;

        account.check_debit(amount)?;
        category.check_unassign(amount, self.policy.allow_overspent_categories)?;
        let delta = -i128::from(amount.cents());
        self.check_totals(amount, delta, delta)
    }

    fn try_spend(
        &mut self,
        amount: Money,
        account_id: AccountId,
        category_id: CategoryId,
        details: SpendDetails,
    ) -> LedgerResult<TransactionId> {
        self.check_spend(amount, account_id, category_id)?;
        if let Some(payee) = details.payee {
            if self.payee(payee).is_none() {
                return Err(LedgerError::payee_not_found(payee.to_string()));
            }
        }

        let mut txn = match details.date {
            Some(date) => Transaction::new(date, -amount),
            None => Transaction::outflow(amount),
        };
        txn = txn
            .with_category(category_id)
            .with_payee(details.payee)
            .with_memo(details.memo);

        // Every failure the two calls below can report was checked above.
        let txn_id = self.accounts[&account_id].post(txn)?;
        self.categories[&category_id].unassign(amount)?;
        Ok(txn_id)
    }

    /// Budget-wide (total funds, assigned funds) in a type no mix of
    /// balances can overflow
    fn raw_totals(&self) -> (i128, i128) {
        let total: i128 = self
            .accounts
            .values()
            .map(|a| i128::from(a.balance().cents()))
            .sum();
        let assigned: i128 = self
            .categories
            .values()
            .map(|c| i128::from(c.available().cents()))
            .sum();
        (total, assigned)
    }

    /// Reject a change that would leave total, assigned or unassigned funds
    /// outside the range of `Money`
    fn check_totals(
        &self,
        amount: Money,
        total_delta: i128,
        assigned_delta: i128,
    ) -> LedgerResult<()> {
        let (total, assigned) = self.raw_totals();
        let total = total + total_delta;
        let assigned = assigned + assigned_delta;
        let fits = |cents: i128| i64::try_from(cents).is_ok();
        if fits(total) && fits(assigned) && fits(total - assigned) {
            Ok(())
        } else {
            Err(LedgerError::AmountOverflow { amount })
        }
    }
}

/// Every mutation goes through `check_totals`, so the totals always fit and
/// the saturation here never applies.
fn clamp_cents(cents: i128) -> Money {
    let saturated = if cents < 0 { i64::MIN } else { i64::MAX };
    Money::from_cents(i64::try_from(cents).unwrap_or(saturated))
}

/// Trim `name` and make sure it is non-empty and not already taken
fn validate_name<'a>(
    entity_type: &'static str,
    name: &str,
    mut existing: impl Iterator<Item = &'a str>,
) -> LedgerResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::MissingName { entity_type });
    }
    if existing.any(|n| n == name) {
        return Err(LedgerError::DuplicateName {
            entity_type,
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    /// Checking with 500.00, Food with 100.00 assigned
    fn scenario() -> (Budget, AccountId, CategoryId) {
        let mut budget = Budget::new();
        let checking = budget.add_account("Checking").unwrap();
        let food = budget.add_category("Food").unwrap();
        budget.deposit(cents(50000), checking).unwrap();
        budget.assign(cents(10000), food).unwrap();
        (budget, checking, food)
    }

    #[test]
    fn test_empty_budget() {
        let budget = Budget::new();
        assert_eq!(budget.accounts().len(), 0);
        assert_eq!(budget.categories().len(), 0);
        assert_eq!(budget.total_funds(), Money::zero());
        assert_eq!(budget.unassigned_funds(), Money::zero());
    }

    #[test]
    fn test_add_account_trims_name() {
        let mut budget = Budget::new();
        let id = budget.add_account("  Groceries  ").unwrap();
        assert_eq!(budget.account(id).unwrap().name(), "Groceries");
        assert_eq!(budget.account(id).unwrap().balance(), Money::zero());
    }

    #[test]
    fn test_add_account_missing_name() {
        let mut budget = Budget::new();
        for name in ["", "   "] {
            assert_eq!(
                budget.add_account(name),
                Err(LedgerError::MissingName {
                    entity_type: "Account"
                })
            );
        }
        assert_eq!(budget.accounts().len(), 0);
    }

    #[test]
    fn test_add_account_duplicate_name() {
        let mut budget = Budget::new();
        budget.add_account("A").unwrap();
        assert_eq!(
            budget.add_account(" A "),
            Err(LedgerError::DuplicateName {
                entity_type: "Account",
                name: "A".into()
            })
        );
        assert_eq!(budget.accounts().len(), 1);

        // case-sensitive
        budget.add_account("a").unwrap();
        assert_eq!(budget.accounts().len(), 2);
    }

    #[test]
    fn test_add_category_contract() {
        let mut budget = Budget::new();
        budget.add_category("A").unwrap();
        budget.add_category("B").unwrap();
        assert!(matches!(
            budget.add_category("A"),
            Err(LedgerError::DuplicateName { .. })
        ));
        assert!(matches!(
            budget.add_category(" "),
            Err(LedgerError::MissingName {
                entity_type: "Category"
            })
        ));
        assert_eq!(budget.categories().len(), 2);
    }

    #[test]
    fn test_names_are_scoped_per_entity_kind() {
        let mut budget = Budget::new();
        let account = budget.add_account("Cash").unwrap();
        let category = budget.add_category("Cash").unwrap();
        budget.add_payee("Cash").unwrap();
        assert_ne!(account.as_uuid(), category.as_uuid());
    }

    #[test]
    fn test_add_payee_contract() {
        let mut budget = Budget::new();
        let id = budget.add_payee(" payee name ").unwrap();
        assert_eq!(budget.payee(id).unwrap().name(), "payee name");
        assert!(matches!(
            budget.add_payee(""),
            Err(LedgerError::MissingName { entity_type: "Payee" })
        ));
        assert!(matches!(
            budget.add_payee("payee name"),
            Err(LedgerError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_listing_keeps_creation_order() {
        let mut budget = Budget::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            budget.add_account(name).unwrap();
        }
        let names: Vec<&str> = budget.accounts().map(Account::name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_scenario_totals() {
        let (budget, _, _) = scenario();
        assert_eq!(budget.total_funds(), cents(50000));
        assert_eq!(budget.unassigned_funds(), cents(40000));
        assert_eq!(
            budget.summary(),
            BudgetSummary {
                total_funds: cents(50000),
                assigned: cents(10000),
                unassigned_funds: cents(40000),
            }
        );
    }

    #[test]
    fn test_scenario_spend() {
        let (mut budget, checking, food) = scenario();
        budget.spend(cents(3000), checking, food).unwrap();

        assert_eq!(budget.account(checking).unwrap().balance(), cents(47000));
        assert_eq!(budget.category(food).unwrap().available(), cents(7000));
        assert_eq!(budget.unassigned_funds(), cents(40000));

        let txn = budget.account(checking).unwrap().transactions().last().unwrap();
        assert_eq!(txn.amount(), cents(-3000));
        assert_eq!(txn.category_id(), Some(food));
    }

    #[test]
    fn test_deposit_unknown_account() {
        let mut budget = Budget::new();
        let missing = AccountId::new();
        let err = budget.deposit(cents(100), missing).unwrap_err();
        assert_eq!(err, LedgerError::account_not_found(missing.to_string()));
    }

    #[test]
    fn test_deposit_propagates_credit_error() {
        let mut budget = Budget::new();
        let checking = budget.add_account("Checking").unwrap();
        assert_eq!(
            budget.deposit(Money::zero(), checking),
            Err(LedgerError::NonPositiveAmount {
                amount: Money::zero()
            })
        );
        assert_eq!(budget.total_funds(), Money::zero());
    }

    #[test]
    fn test_spend_insufficient_funds_leaves_category_untouched() {
        let (mut budget, checking, food) = scenario();
        let err = budget.spend(cents(60000), checking, food).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(budget.account(checking).unwrap().balance(), cents(50000));
        assert_eq!(budget.category(food).unwrap().available(), cents(10000));
    }

    #[test]
    fn test_spend_unknown_category_leaves_account_untouched() {
        let (mut budget, checking, _) = scenario();
        let missing = CategoryId::new();
        let err = budget.spend(cents(3000), checking, missing).unwrap_err();
        assert_eq!(err, LedgerError::category_not_found(missing.to_string()));
        assert_eq!(budget.account(checking).unwrap().balance(), cents(50000));
        assert_eq!(budget.account(checking).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_spend_unknown_account() {
        let (mut budget, _, food) = scenario();
        let err = budget.spend(cents(3000), AccountId::new(), food).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(budget.category(food).unwrap().available(), cents(10000));
    }

    #[test]
    fn test_spend_non_positive_amount() {
        let (mut budget, checking, food) = scenario();
        assert!(matches!(
            budget.spend(cents(-5), checking, food),
            Err(LedgerError::NonPositiveAmount { .. })
        ));
        assert_eq!(budget.summary().total_funds, cents(50000));
    }

    #[test]
    fn test_spend_overspends_category_by_default() {
        let (mut budget, checking, food) = scenario();
        budget.spend(cents(15000), checking, food).unwrap();
        assert_eq!(budget.category(food).unwrap().available(), cents(-5000));
        let overspent: Vec<&str> = budget
            .overspent_categories()
            .into_iter()
            .map(Category::name)
            .collect();
        assert_eq!(overspent, vec!["Food"]);
        assert_eq!(
            budget.unassigned_funds(),
            budget.total_funds() - budget.assigned_funds()
        );
    }

    #[test]
    fn test_spend_respects_strict_policy() {
        let mut budget = Budget::with_policy(BudgetPolicy {
            allow_overspent_categories: false,
        });
        let checking = budget.add_account("Checking").unwrap();
        let food = budget.add_category("Food").unwrap();
        budget.deposit(cents(50000), checking).unwrap();
        budget.assign(cents(10000), food).unwrap();

        let err = budget.spend(cents(15000), checking, food).unwrap_err();
        assert!(matches!(err, LedgerError::CategoryOverdrawn { .. }));
        assert_eq!(budget.account(checking).unwrap().balance(), cents(50000));

        assert!(matches!(
            budget.unassign(cents(10001), food),
            Err(LedgerError::CategoryOverdrawn { .. })
        ));
        budget.unassign(cents(10000), food).unwrap();
        assert_eq!(budget.category(food).unwrap().available(), Money::zero());
    }

    #[test]
    fn test_spend_with_details() {
        let (mut budget, checking, food) = scenario();
        let store = budget.add_payee("Corner Store").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let txn_id = budget
            .spend_with(
                cents(1250),
                checking,
                food,
                SpendDetails {
                    payee: Some(store),
                    date: Some(date),
                    memo: "milk".into(),
                },
            )
            .unwrap();

        let (account, txn) = budget
            .transactions()
            .find(|(_, t)| t.id() == txn_id)
            .unwrap();
        assert_eq!(account.id(), checking);
        assert_eq!(txn.payee_id(), Some(store));
        assert_eq!(txn.date(), date);
        assert_eq!(txn.memo(), "milk");
    }

    #[test]
    fn test_spend_unknown_payee() {
        let (mut budget, checking, food) = scenario();
        let details = SpendDetails {
            payee: Some(PayeeId::new()),
            ..SpendDetails::default()
        };
        let err = budget
            .spend_with(cents(100), checking, food, details)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::NotFound {
                entity_type: "Payee",
                ..
            }
        ));
        assert_eq!(budget.account(checking).unwrap().balance(), cents(50000));
    }

    #[test]
    fn test_move_funds() {
        let (mut budget, _, food) = scenario();
        let rent = budget.add_category("Rent").unwrap();
        budget.move_funds(cents(4000), food, rent).unwrap();
        assert_eq!(budget.category(food).unwrap().available(), cents(6000));
        assert_eq!(budget.category(rent).unwrap().available(), cents(4000));
        assert_eq!(budget.unassigned_funds(), cents(40000));
    }

    #[test]
    fn test_move_funds_unknown_target_is_atomic() {
        let (mut budget, _, food) = scenario();
        let err = budget
            .move_funds(cents(4000), food, CategoryId::new())
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(budget.category(food).unwrap().available(), cents(10000));
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (budget, checking, food) = scenario();
        assert_eq!(budget.find_account("Checking").unwrap().id(), checking);
        assert_eq!(
            budget.find_account(&checking.to_string()).unwrap().id(),
            checking
        );
        assert_eq!(budget.find_category("Food").unwrap().id(), food);
        assert!(budget.find_account("Savings").unwrap_err().is_not_found());
        assert!(budget.find_payee("Nobody").unwrap_err().is_not_found());
    }

    #[test]
    fn test_serializes_snapshot() {
        let (budget, checking, _) = scenario();
        let json = serde_json::to_value(&budget).unwrap();
        let account = &json["accounts"][checking.to_string()];
        assert_eq!(account["name"], "Checking");
        assert_eq!(account["balance"], 50000);
    }

    #[test]
    fn test_assign_rejects_assigned_total_overflow() {
        let mut budget = Budget::new();
        let a = budget.add_category("A").unwrap();
        let b = budget.add_category("B").unwrap();
        budget.assign(cents(i64::MAX), a).unwrap();

        assert_eq!(
            budget.assign(cents(i64::MAX), b),
            Err(LedgerError::AmountOverflow {
                amount: cents(i64::MAX)
            })
        );
        assert_eq!(budget.category(b).unwrap().available(), Money::zero());
        assert_eq!(budget.assigned_funds(), cents(i64::MAX));
        assert_eq!(budget.unassigned_funds(), cents(-i64::MAX));
    }

    #[test]
    fn test_unassign_rejects_unassigned_overflow() {
        let mut budget = Budget::new();
        let checking = budget.add_account("Checking").unwrap();
        let food = budget.add_category("Food").unwrap();
        budget.deposit(cents(i64::MAX), checking).unwrap();

        // every cent is already unassigned, so overspending by one has nowhere to go
        assert_eq!(
            budget.unassign(cents(1), food),
            Err(LedgerError::AmountOverflow { amount: cents(1) })
        );
        assert_eq!(budget.category(food).unwrap().available(), Money::zero());
        assert_eq!(budget.summary().unassigned_funds, cents(i64::MAX));
    }

    #[test]
    fn test_deposit_rejects_total_overflow() {
        let mut budget = Budget::new();
        let checking = budget.add_account("Checking").unwrap();
        let savings = budget.add_account("Savings").unwrap();
        budget.deposit(cents(i64::MAX - 10), checking).unwrap();

        assert_eq!(
            budget.deposit(cents(11), savings),
            Err(LedgerError::AmountOverflow { amount: cents(11) })
        );
        budget.deposit(cents(10), savings).unwrap();
        assert_eq!(budget.total_funds(), cents(i64::MAX));
        assert_eq!(budget.unassigned_funds(), cents(i64::MAX));
        assert_eq!(budget.account(savings).unwrap().transactions().len(), 1);
    }

    #[test]
    fn test_check_spend_mutates_nothing() {
        let (budget, checking, food) = scenario();
        assert_eq!(budget.check_spend(cents(3000), checking, food), Ok(()));
        assert!(matches!(
            budget.check_spend(cents(60000), checking, food),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(budget.total_funds(), cents(50000));
        assert_eq!(budget.account(checking).unwrap().transactions().len(), 1);
    }
}

//! Envelope Ledger - the core of an envelope budgeting application
//!
//! Money sits in named accounts and is handed out to named spending
//! categories. The [`Budget`](models::Budget) aggregate owns both, keeps names
//! unique, and runs the operations that move money: deposits, assignments and
//! spends. Every failure is a typed [`LedgerError`].
//!
//! # Architecture
//!
//! - `models`: money, ids, accounts, categories, payees, transactions and the budget
//! - `services`: a lock-guarded handle for sharing one budget between threads
//! - `config`: path resolution and user settings
//! - `display`: terminal table formatting
//! - `cli`: the command-script interpreter behind the binary
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```
//! use envelope_ledger::models::{Budget, Money};
//!
//! let mut budget = Budget::new();
//! let checking = budget.add_account("Checking")?;
//! let food = budget.add_category("Food")?;
//! budget.deposit(Money::from_cents(50_000), checking)?;
//! budget.assign(Money::from_cents(10_000), food)?;
//! budget.spend(Money::from_cents(3_000), checking, food)?;
//!
//! assert_eq!(budget.total_funds(), Money::from_cents(47_000));
//! assert_eq!(budget.unassigned_funds(), Money::from_cents(40_000));
//! # Ok::<(), envelope_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use services::SharedBudget;

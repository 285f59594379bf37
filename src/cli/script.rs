//! Command scripts
//!
//! A script is one command per line, parsed with shell-style quoting so names
//! may contain spaces. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! account add "Chase Checking"
//! category add Food
//! deposit 500.00 "Chase Checking"
//! assign 100 Food
//! spend 30 "Chase Checking" Food --payee "Corner Store" --memo lunch
//! summary
//! ```

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::Settings;
use crate::display::{format_account_list, format_category_list, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money, PayeeId, SpendDetails};

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct ScriptLine {
    #[command(subcommand)]
    command: ScriptCommand,
}

/// One parsed script line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Account management
    Account {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Category management
    Category {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Payee management
    Payee {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Credit an account
    Deposit {
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        account: String,
    },
    /// Move unassigned money into a category
    Assign {
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        category: String,
    },
    /// Move money out of a category
    Unassign {
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        category: String,
    },
    /// Move money between categories
    Move {
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        from: String,
        to: String,
    },
    /// Spend from an account against a category
    Spend {
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        account: String,
        category: String,
        /// Payee name; created on first use
        #[arg(long)]
        payee: Option<String>,
        #[arg(long)]
        memo: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List accounts
    Accounts,
    /// List categories
    Categories,
    /// Show totals
    Summary,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EntityAction {
    Add { name: String },
}

/// A failure on a specific script line
#[derive(Error, Debug)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: LedgerError,
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> LedgerResult<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed).map_err(|e| LedgerError::Parse(e.to_string()))?;
    let parsed = ScriptLine::try_parse_from(words).map_err(|e| {
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        LedgerError::Parse(first.trim_start_matches("error: ").to_string())
    })?;
    Ok(Some(parsed.command))
}

/// Runs script commands against one in-memory budget
#[derive(Debug)]
pub struct Interpreter {
    budget: Budget,
    symbol: String,
}

impl Interpreter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            budget: Budget::with_policy(settings.policy()),
            symbol: settings.currency_symbol.clone(),
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.symbol)
    }

    /// Execute one command and return what it prints
    pub fn execute(&mut self, command: ScriptCommand) -> LedgerResult<String> {
        let output = match command {
            ScriptCommand::Account {
                action: EntityAction::Add { name },
            } => {
                let id = self.budget.add_account(&name)?;
                format!("Created account: {} ({})\n", name.trim(), id)
            }
            ScriptCommand::Category {
                action: EntityAction::Add { name },
            } => {
                let id = self.budget.add_category(&name)?;
                format!("Created category: {} ({})\n", name.trim(), id)
            }
            ScriptCommand::Payee {
                action: EntityAction::Add { name },
            } => {
                let id = self.budget.add_payee(&name)?;
                format!("Created payee: {} ({})\n", name.trim(), id)
            }
            ScriptCommand::Deposit { amount, account } => {
                let account = self.budget.find_account(&account)?.id();
                self.budget.deposit(amount, account)?;
                format!(
                    "Deposited {} -> balance {}\n",
                    self.money(amount),
                    self.money(self.account_balance(account))
                )
            }
            ScriptCommand::Assign { amount, category } => {
                let category = self.budget.find_category(&category)?.id();
                self.budget.assign(amount, category)?;
                format!(
                    "Assigned {} -> available {}\n",
                    self.money(amount),
                    self.money(self.category_available(category))
                )
            }
            ScriptCommand::Unassign { amount, category } => {
                let category = self.budget.find_category(&category)?.id();
                self.budget.unassign(amount, category)?;
                format!(
                    "Unassigned {} -> available {}\n",
                    self.money(amount),
                    self.money(self.category_available(category))
                )
            }
            ScriptCommand::Move { amount, from, to } => {
                let from = self.budget.find_category(&from)?.id();
                let to = self.budget.find_category(&to)?.id();
                self.budget.move_funds(amount, from, to)?;
                format!("Moved {}\n", self.money(amount))
            }
            ScriptCommand::Spend {
                amount,
                account,
                category,
                payee,
                memo,
                date,
            } => {
                let account = self.budget.find_account(&account)?.id();
                let category = self.budget.find_category(&category)?.id();
                // A new payee is only created once the spend is known to succeed.
                let payee = match payee {
                    Some(name) => {
                        self.budget.check_spend(amount, account, category)?;
                        Some(self.payee_or_create(&name)?)
                    }
                    None => None,
                };
                let details = SpendDetails {
                    payee,
                    date,
                    memo: memo.unwrap_or_default(),
                };
                self.budget.spend_with(amount, account, category, details)?;
                format!(
                    "Spent {} -> balance {}, available {}\n",
                    self.money(amount),
                    self.money(self.account_balance(account)),
                    self.money(self.category_available(category))
                )
            }
            ScriptCommand::Accounts => format_account_list(self.budget.accounts(), &self.symbol),
            ScriptCommand::Categories => {
                format_category_list(self.budget.categories(), &self.symbol)
            }
            ScriptCommand::Summary => format_summary(&self.budget.summary(), &self.symbol),
        };
        Ok(output)
    }

    /// Parse and execute one line
    pub fn execute_line(&mut self, line: &str) -> LedgerResult<Option<String>> {
        match parse_line(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Run a whole script, stopping at the first failing line
    pub fn run_script(&mut self, source: &str, out: &mut dyn Write) -> Result<(), ScriptError> {
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let at_line = |source: LedgerError| ScriptError {
                line: line_no,
                source,
            };
            if let Some(output) = self.execute_line(line).map_err(at_line)? {
                out.write_all(output.as_bytes())
                    .map_err(|e| at_line(e.into()))?;
            }
        }
        Ok(())
    }

    /// Interactive loop: errors are reported and the loop continues
    pub fn run_shell(
        &mut self,
        input: impl BufRead,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> LedgerResult<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if matches!(line.trim(), "quit" | "exit") {
                break;
            }
            match self.execute_line(&line) {
                Ok(Some(output)) => out.write_all(output.as_bytes())?,
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(line = index + 1, error = %e, "command failed");
                    writeln!(err, "error: {}", e)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn payee_or_create(&mut self, name: &str) -> LedgerResult<PayeeId> {
        if let Some(payee) = self.budget.payee_by_name(name) {
            return Ok(payee.id());
        }
        self.budget.add_payee(name)
    }

    fn account_balance(&self, id: crate::models::AccountId) -> Money {
        self.budget
            .account(id)
            .map(|a| a.balance())
            .unwrap_or_default()
    }

    fn category_available(&self, id: crate::models::CategoryId) -> Money {
        self.budget
            .category(id)
            .map(|c| c.available())
            .unwrap_or_default()
    }
}

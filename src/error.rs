//! Error types for the envelope ledger
//!
//! Every failure the ledger can produce is a variant of [`LedgerError`], carrying
//! enough context (entity, amount, balance) for callers to branch on the kind
//! and still print something useful.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An amount passed to credit/debit/assign/unassign was zero or negative
    #[error("Amount must be greater than zero, got {amount}")]
    NonPositiveAmount { amount: Money },

    /// A debit would take an account below zero
    #[error("Insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Money,
        available: Money,
    },

    /// An unassign would take a category below zero while overspending is disabled
    #[error("Category '{category}' would be overdrawn: need {needed}, have {available}")]
    CategoryOverdrawn {
        category: String,
        needed: Money,
        available: Money,
    },

    /// A name was empty after trimming
    #[error("{entity_type} name is required")]
    MissingName { entity_type: &'static str },

    /// A name collides with an existing entity of the same kind
    #[error("{entity_type} already exists: {name}")]
    DuplicateName {
        entity_type: &'static str,
        name: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Arithmetic would exceed the representable range
    #[error("Amount overflow while applying {amount}")]
    AmountOverflow { amount: Money },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed user input (amounts, ids, script lines)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LedgerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payees
    pub fn payee_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payee",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from a rejected amount or balance check
    pub fn is_amount_error(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveAmount { .. }
                | Self::InsufficientFunds { .. }
                | Self::CategoryOverdrawn { .. }
                | Self::AmountOverflow { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

//! Payee model
//!
//! A named counterparty that spending transactions can point at.

use serde::Serialize;
use std::fmt;

use super::ids::PayeeId;

#[derive(Debug, Clone, Serialize)]
pub struct Payee {
    id: PayeeId,
    name: String,
}

impl Payee {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: PayeeId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> PayeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Payee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

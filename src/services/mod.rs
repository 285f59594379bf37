//! Service layer
//!
//! Host-facing wrappers around the budget aggregate.

pub mod shared;

pub use shared::SharedBudget;

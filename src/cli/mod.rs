//! CLI command handling
//!
//! Bridges clap argument parsing and the script language with the budget
//! aggregate.

pub mod script;

pub use script::{parse_line, EntityAction, Interpreter, ScriptCommand, ScriptError};

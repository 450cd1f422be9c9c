//! Builder API for ergonomic table and machine construction.
//!
//! This module provides fluent builders and macros for declaring states,
//! events and transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use table::TableBuilder;

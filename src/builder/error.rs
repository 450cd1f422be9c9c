//! Build errors for table and machine builders.

use crate::core::{Event, State};
use crate::table::TableDefect;
use thiserror::Error;

/// Errors that can occur when building transition tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<S: State, E: Event> {
    #[error("State '{}' defined more than once", .state.name())]
    DuplicateState { state: S },

    #[error("Transition table has {} defect(s)", .defects.len())]
    InvalidTable { defects: Vec<TableDefect<S, E>> },
}

//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::table::{StateEntry, TransitionTable};

/// Builder for constructing transition tables with a fluent API.
pub struct TableBuilder<S, E, C> {
    entries: Vec<(S, StateEntry<S, E, C>)>,
}

impl<S: State, E: Event, C> TableBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Define the entry for `state`.
    pub fn state(mut self, state: S, entry: StateEntry<S, E, C>) -> Self {
        self.entries.push((state, entry));
        self
    }

    /// Define the events accepted by the initial pseudo-state.
    pub fn initial(self, entry: StateEntry<S, E, C>) -> Self {
        self.state(S::initial(), entry)
    }

    /// Build the table.
    ///
    /// Only duplicate state definitions are refused here. Dangling targets
    /// and missing actions are left for the machine to detect when (and if)
    /// a submission reaches them; use [`build_validated`](Self::build_validated)
    /// to refuse those up front.
    pub fn build(self) -> Result<TransitionTable<S, E, C>, BuildError<S, E>> {
        let mut table = TransitionTable::new();
        for (state, entry) in self.entries {
            if table.contains(&state) {
                return Err(BuildError::DuplicateState { state });
            }
            table.insert(state, entry);
        }
        Ok(table)
    }

    /// Build the table and run the full validation pass on it.
    pub fn build_validated(self) -> Result<TransitionTable<S, E, C>, BuildError<S, E>> {
        let table = self.build()?;
        table
            .check()
            .map_err(|defects| BuildError::InvalidTable { defects })?;
        Ok(table)
    }
}

impl<S: State, E: Event, C> Default for TableBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

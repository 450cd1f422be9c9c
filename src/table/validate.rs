//! Up-front table validation.
//!
//! Machines detect a broken table lazily, the first time a submission
//! reaches the broken entry. This pass finds every defect at once, before
//! any event is sent, accumulating them with `Validation` instead of
//! stopping at the first one.

use super::TransitionTable;
use crate::core::{Event, State};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A structural problem in a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableDefect<S: State, E: Event> {
    #[error(
        "state '{}' maps event '{}' to '{}', which is not in the table",
        .from.name(),
        .event.name(),
        .target.name()
    )]
    UnknownTarget { from: S, event: E, target: S },

    #[error("state '{}' is a transition target but has no action", .state.name())]
    MissingAction { state: S },

    #[error("state '{}' dispatches on the reserved no-op event", .state.name())]
    NoOpTrigger { state: S },

    #[error(
        "state '{}' maps event '{}' back to the initial pseudo-state",
        .from.name(),
        .event.name()
    )]
    InitialTargeted { from: S, event: E },
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    /// Check every entry, accumulating ALL defects.
    ///
    /// Returns `Validation::Success(())` for a well-formed table.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TableDefect<S, E>>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableDefect<S, E>>>> = Vec::new();
        let mut actionless = HashSet::new();

        for (state, entry) in self.entries() {
            for (event, target) in entry.events() {
                if event.is_no_op() {
                    checks.push(Validation::fail(TableDefect::NoOpTrigger {
                        state: state.clone(),
                    }));
                }

                if target.is_initial() {
                    checks.push(Validation::fail(TableDefect::InitialTargeted {
                        from: state.clone(),
                        event: event.clone(),
                    }));
                }

                match self.entry(target) {
                    None => checks.push(Validation::fail(TableDefect::UnknownTarget {
                        from: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    })),
                    Some(found) if !found.has_action() && actionless.insert(target.clone()) => {
                        checks.push(Validation::fail(TableDefect::MissingAction {
                            state: target.clone(),
                        }))
                    }
                    Some(_) => {}
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a plain `Result`.
    pub fn check(&self) -> Result<(), Vec<TableDefect<S, E>>> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(defects) => Err(defects.iter().cloned().collect()),
        }
    }
}

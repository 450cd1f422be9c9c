//! Transition tables.
//!
//! A table maps each state to its [`StateEntry`]: the action run on entering
//! it and the events it accepts. Tables are built once and then shared,
//! read-only, by every machine that runs them.

mod entry;
mod validate;

pub use entry::StateEntry;
pub use validate::TableDefect;

use crate::builder::TableBuilder;
use crate::core::{Event, State};
use std::collections::HashMap;
use std::fmt;

/// Mapping from state to its transition entry.
///
/// # Example
///
/// ```rust
/// use statechain::core::{EventId, StateId};
/// use statechain::table::{StateEntry, TransitionTable};
///
/// let table: TransitionTable<StateId, EventId, ()> = TransitionTable::builder()
///     .state(StateId::DEFAULT, StateEntry::new().on("SwitchOff".into(), "Off".into()))
///     .state(
///         "Off".into(),
///         StateEntry::new()
///             .on_entry(|_: &mut ()| EventId::NO_OP)
///             .on("SwitchOn".into(), "On".into()),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     table.resolve(&StateId::DEFAULT, &"SwitchOff".into()),
///     Some(&StateId::from("Off"))
/// );
/// assert!(table.resolve(&"Off".into(), &"SwitchOff".into()).is_none());
/// ```
pub struct TransitionTable<S, E, C> {
    states: HashMap<S, StateEntry<S, E, C>>,
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Start a fluent table definition.
    pub fn builder() -> TableBuilder<S, E, C> {
        TableBuilder::new()
    }

    /// Insert or replace the entry for `state`, returning the old one.
    pub fn insert(
        &mut self,
        state: S,
        entry: StateEntry<S, E, C>,
    ) -> Option<StateEntry<S, E, C>> {
        self.states.insert(state, entry)
    }

    pub fn entry(&self, state: &S) -> Option<&StateEntry<S, E, C>> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Resolve the state `event` leads to from `current`.
    ///
    /// Returns `None` when `current` has no entry, accepts no events, or
    /// does not accept `event`. Pure: nothing is executed.
    pub fn resolve(&self, current: &S, event: &E) -> Option<&S> {
        self.states.get(current)?.target(event)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&S, &StateEntry<S, E, C>)> {
        self.states.iter()
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: State, E: Event, C> Default for TransitionTable<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, C> FromIterator<(S, StateEntry<S, E, C>)> for TransitionTable<S, E, C> {
    fn from_iter<I: IntoIterator<Item = (S, StateEntry<S, E, C>)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl<S: Clone, E: Clone, C> Clone for TransitionTable<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug, C> fmt::Debug for TransitionTable<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.states)
            .finish()
    }
}

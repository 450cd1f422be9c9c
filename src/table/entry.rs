//! Per-state transition entries.

use crate::core::{Action, Event, SharedAction, State};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a state does: its optional entry action and the events it accepts.
///
/// An entry with no events is terminal; every event sent while the machine
/// is in it is rejected.
///
/// # Example
///
/// ```rust
/// use statechain::core::{EventId, StateId};
/// use statechain::table::StateEntry;
///
/// let off: StateEntry<StateId, EventId, ()> = StateEntry::new()
///     .on_entry(|_: &mut ()| EventId::NO_OP)
///     .on("SwitchOn".into(), "On".into());
///
/// assert!(off.has_action());
/// assert_eq!(off.target(&EventId::from("SwitchOn")), Some(&StateId::from("On")));
/// assert!(!off.is_terminal());
/// ```
pub struct StateEntry<S, E, C> {
    action: Option<SharedAction<C, E>>,
    events: HashMap<E, S>,
}

impl<S: State, E: Event, C> StateEntry<S, E, C> {
    /// Create an entry with no action and no events.
    pub fn new() -> Self {
        Self {
            action: None,
            events: HashMap::new(),
        }
    }

    /// Set the entry action.
    pub fn action<A>(mut self, action: A) -> Self
    where
        A: Action<C, E> + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set the entry action from a closure.
    pub fn on_entry<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C) -> E + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Share an existing action handle with this entry.
    pub fn shared_action(mut self, action: SharedAction<C, E>) -> Self {
        self.action = Some(action);
        self
    }

    /// Accept `event` in this state, moving to `target`.
    ///
    /// Mapping the same event twice keeps the last target.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.events.insert(event, target);
        self
    }

    pub fn action_handle(&self) -> Option<&SharedAction<C, E>> {
        self.action.as_ref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Target state for `event`, if this state accepts it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.events.get(event)
    }

    pub fn accepts(&self, event: &E) -> bool {
        self.events.contains_key(event)
    }

    pub fn events(&self) -> impl Iterator<Item = (&E, &S)> {
        self.events.iter()
    }

    pub fn is_terminal(&self) -> bool {
        self.events.is_empty()
    }
}

impl<S: State, E: Event, C> Default for StateEntry<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, E: Clone, C> Clone for StateEntry<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            events: self.events.clone(),
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug, C> fmt::Debug for StateEntry<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateEntry")
            .field("has_action", &self.action.is_some())
            .field("events", &self.events)
            .finish()
    }
}

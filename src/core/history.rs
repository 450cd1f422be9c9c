//! Transition history tracking.
//!
//! A machine can optionally record every hop it performs. The history is a
//! diagnostic aid; it is never consulted by the transition logic.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single hop.
///
/// # Example
///
/// ```rust
/// use statechain::core::{EventId, StateId, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StateId::DEFAULT,
///     to: StateId::from("Off"),
///     event: EventId::from("SwitchOff"),
///     hop: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.hop, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The event that caused the hop
    pub event: E,
    /// Position of this hop within its submission, starting at 1
    pub hop: usize,
    /// When the hop was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of hops.
///
/// When a capacity is set, recording past it drops the oldest entries.
///
/// # Example
///
/// ```rust
/// use statechain::core::{EventId, StateHistory, StateId, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: StateId::DEFAULT,
///     to: StateId::from("CreatingOrder"),
///     event: EventId::from("CreateOrder"),
///     hop: 1,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: StateId::from("CreatingOrder"),
///     to: StateId::from("OrderPlaced"),
///     event: EventId::from("PlaceOrder"),
///     hop: 2,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &StateId::from("OrderPlaced"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
    capacity: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            capacity: None,
        }
    }

    /// Create an empty history keeping at most `capacity` hops.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a hop, evicting the oldest ones beyond the capacity.
    pub fn record(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
        if let Some(capacity) = self.capacity {
            if self.transitions.len() > capacity {
                let excess = self.transitions.len() - capacity;
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained hop, then the `to`
    /// state of every hop in order. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained hops.
    ///
    /// Returns `None` if there are no hops.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

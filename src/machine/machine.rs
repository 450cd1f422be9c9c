//! State machine that runs a transition table.

use crate::builder::MachineBuilder;
use crate::core::{Action, Event, State, StateHistory, StateTransition};
use crate::machine::config::MachineConfig;
use crate::machine::error::{ConfigDefect, MachineError};
use crate::machine::guard::SubmissionGuard;
use crate::table::TransitionTable;
use chrono::Utc;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Where the machine is.
struct Cursor<S: State, E: Event> {
    current: S,
    previous: S,
    history: Option<StateHistory<S, E>>,
}

/// A running instance of a transition table.
///
/// The machine starts in the initial pseudo-state. Each call to
/// [`send_event`](Self::send_event) moves it through one or more hops:
/// every state entered runs its action, and the event that action returns
/// is sent on automatically until some action returns the no-op event.
///
/// Submissions are serialized: while one chain runs, other threads calling
/// `send_event` on the same machine wait for it to finish.
///
/// # Example
///
/// ```rust
/// use statechain::core::{EventId, StateId};
/// use statechain::machine::StateMachine;
/// use statechain::table::{StateEntry, TransitionTable};
///
/// let table = TransitionTable::builder()
///     .initial(StateEntry::new().on("SwitchOff".into(), "Off".into()))
///     .state(
///         "Off".into(),
///         StateEntry::new()
///             .on_entry(|_: &mut ()| EventId::NO_OP)
///             .on("SwitchOn".into(), "On".into()),
///     )
///     .state(
///         "On".into(),
///         StateEntry::new()
///             .on_entry(|_: &mut ()| EventId::NO_OP)
///             .on("SwitchOff".into(), "Off".into()),
///     )
///     .build()
///     .unwrap();
///
/// let machine: StateMachine<StateId, EventId, ()> = StateMachine::new(table);
///
/// machine.send_event("SwitchOff".into(), &mut ()).unwrap();
/// assert_eq!(machine.current(), StateId::from("Off"));
///
/// let err = machine.send_event("SwitchOff".into(), &mut ()).unwrap_err();
/// assert!(err.is_rejected());
/// assert_eq!(machine.current(), StateId::from("Off"));
/// ```
pub struct StateMachine<S: State, E: Event, C> {
    id: Uuid,
    table: Arc<TransitionTable<S, E, C>>,
    config: MachineConfig,
    guard: SubmissionGuard,
    cursor: RwLock<Cursor<S, E>>,
}

impl<S: State, E: Event, C> StateMachine<S, E, C> {
    /// Create a machine with the default configuration.
    pub fn new(table: impl Into<Arc<TransitionTable<S, E, C>>>) -> Self {
        Self::with_config(table, MachineConfig::default())
    }

    /// Start configuring a machine.
    pub fn builder(table: impl Into<Arc<TransitionTable<S, E, C>>>) -> MachineBuilder<S, E, C> {
        MachineBuilder::new(table)
    }

    pub fn with_config(
        table: impl Into<Arc<TransitionTable<S, E, C>>>,
        config: MachineConfig,
    ) -> Self {
        let history = config.record_history.then(|| match config.history_capacity {
            Some(capacity) => StateHistory::bounded(capacity),
            None => StateHistory::new(),
        });
        let initial = S::initial();

        Self {
            id: Uuid::new_v4(),
            table: table.into(),
            config,
            guard: SubmissionGuard::new(),
            cursor: RwLock::new(Cursor {
                current: initial.clone(),
                previous: initial,
                history,
            }),
        }
    }

    /// Send an event and run the resulting chain to completion.
    ///
    /// The same `ctx` is handed to every action in the chain, so changes an
    /// action makes are seen by later actions and by the caller.
    ///
    /// # Errors
    ///
    /// - [`MachineError::Rejected`] when the current state does not accept
    ///   the event. This includes the no-op event, which no state accepts.
    /// - [`MachineError::ConfigurationInvalid`] when the resolved target is
    ///   missing from the table or has no action.
    /// - [`MachineError::Reentrant`] when called from inside one of this
    ///   machine's own actions.
    /// - [`MachineError::HopLimitExceeded`] when a hop limit is configured
    ///   and the chain would exceed it.
    ///
    /// Hops completed before an error are kept: the machine stays in the
    /// last state it successfully entered.
    pub fn send_event(&self, event: E, ctx: &mut C) -> Result<(), MachineError<S, E>> {
        let Some(_in_flight) = self.guard.enter() else {
            tracing::warn!(machine = %self.id, event = event.name(), "re-entrant event refused");
            return Err(MachineError::Reentrant { event });
        };

        let span = tracing::debug_span!("send_event", machine = %self.id, event = event.name());
        let _entered = span.enter();

        let mut event = event;
        let mut hops = 0usize;
        loop {
            let current = self.cursor.read().current.clone();

            let Some(target) = self.table.resolve(&current, &event) else {
                tracing::debug!(
                    state = current.name(),
                    event = event.name(),
                    hops,
                    "event rejected"
                );
                return Err(MachineError::Rejected {
                    state: current,
                    event,
                });
            };

            let entry = self.table.entry(target);
            let Some(action) = entry.and_then(|entry| entry.action_handle()) else {
                let defect = if entry.is_none() {
                    ConfigDefect::MissingState
                } else {
                    ConfigDefect::MissingAction
                };
                tracing::warn!(
                    target_state = target.name(),
                    event = event.name(),
                    %defect,
                    "state machine configuration invalid"
                );
                return Err(MachineError::ConfigurationInvalid {
                    target: target.clone(),
                    event,
                    defect,
                });
            };

            if let Some(limit) = self.config.max_hops {
                if hops >= limit.get() {
                    tracing::warn!(
                        state = current.name(),
                        limit = limit.get(),
                        "hop limit reached"
                    );
                    return Err(MachineError::HopLimitExceeded {
                        limit,
                        state: current,
                    });
                }
            }

            hops += 1;
            self.advance(target.clone(), &event, hops);
            tracing::debug!(
                from = current.name(),
                to = target.name(),
                event = event.name(),
                hop = hops,
                "state transition"
            );

            let next = action.execute(ctx);
            if next.is_no_op() {
                return Ok(());
            }
            event = next;
        }
    }

    fn advance(&self, target: S, event: &E, hop: usize) {
        let mut guard = self.cursor.write();
        let cursor = &mut *guard;
        let from = std::mem::replace(&mut cursor.current, target);
        if let Some(history) = cursor.history.as_mut() {
            history.record(StateTransition {
                from: from.clone(),
                to: cursor.current.clone(),
                event: event.clone(),
                hop,
                timestamp: Utc::now(),
            });
        }
        cursor.previous = from;
    }

    /// The state entered last, or the initial pseudo-state.
    pub fn current(&self) -> S {
        self.cursor.read().current.clone()
    }

    /// The state before [`current`](Self::current).
    pub fn previous(&self) -> S {
        self.cursor.read().previous.clone()
    }

    /// Check whether the current state accepts `event` (pure).
    pub fn accepts(&self, event: &E) -> bool {
        let cursor = self.cursor.read();
        self.table.resolve(&cursor.current, event).is_some()
    }

    /// Check whether the current state accepts no events at all.
    pub fn is_terminal(&self) -> bool {
        let cursor = self.cursor.read();
        self.table
            .entry(&cursor.current)
            .map_or(true, |entry| entry.is_terminal())
    }

    /// Snapshot of the recorded hops, if history is enabled.
    pub fn history(&self) -> Option<StateHistory<S, E>> {
        self.cursor.read().history.clone()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn table(&self) -> &Arc<TransitionTable<S, E, C>> {
        &self.table
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl<S: State, E: Event, C> fmt::Debug for StateMachine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.cursor.read();
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("current", &cursor.current)
            .field("previous", &cursor.previous)
            .field("states", &self.table.len())
            .finish()
    }
}

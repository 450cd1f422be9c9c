//! Builder for constructing state machines.

use crate::core::{Event, State};
use crate::machine::{MachineConfig, StateMachine};
use crate::table::TransitionTable;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Builder for configuring a state machine with a fluent API.
pub struct MachineBuilder<S: State, E: Event, C> {
    table: Arc<TransitionTable<S, E, C>>,
    config: MachineConfig,
}

impl<S: State, E: Event, C> MachineBuilder<S, E, C> {
    /// Create a builder for a machine running `table`.
    pub fn new(table: impl Into<Arc<TransitionTable<S, E, C>>>) -> Self {
        Self {
            table: table.into(),
            config: MachineConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop any single submission after `limit` hops.
    pub fn max_hops(mut self, limit: NonZeroUsize) -> Self {
        self.config.max_hops = Some(limit);
        self
    }

    /// Record hops, keeping at most `capacity` of them (`None` keeps all).
    pub fn record_history(mut self, capacity: Option<usize>) -> Self {
        self.config.record_history = true;
        self.config.history_capacity = capacity;
        self
    }

    /// Build the state machine.
    pub fn build(self) -> StateMachine<S, E, C> {
        StateMachine::with_config(self.table, self.config)
    }
}

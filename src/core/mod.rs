//! Core vocabulary of the engine.
//!
//! This module contains the leaf types every other module builds on:
//! - State and event identifiers via the `State` and `Event` traits
//! - The `Action` capability executed on state entry
//! - Optional transition history

mod action;
mod history;
mod state;

pub use action::{Action, SharedAction};
pub use history::{StateHistory, StateTransition};
pub use state::{Event, EventId, State, StateId};

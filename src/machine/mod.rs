//! The transition engine.
//!
//! A [`StateMachine`] runs a shared [`TransitionTable`](crate::table::TransitionTable):
//! it resolves each submitted event against the current state, enters the
//! target, runs its action and keeps going with whatever event the action
//! raises, until an action returns the no-op event or a hop fails.

mod config;
mod error;
mod guard;
#[allow(clippy::module_inception)]
mod machine;

pub use config::MachineConfig;
pub use error::{ConfigDefect, ErrorKind, MachineError};
pub use machine::StateMachine;

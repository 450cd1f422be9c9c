//! Submission errors.

use crate::core::{Event, State};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Why a resolved target state cannot be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigDefect {
    #[error("target state is not in the table")]
    MissingState,

    #[error("target state has no action")]
    MissingAction,
}

/// Coarse classification of a [`MachineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Rejected,
    ConfigurationInvalid,
    Reentrant,
    HopLimitExceeded,
}

/// Errors returned by [`StateMachine::send_event`](crate::machine::StateMachine::send_event).
///
/// `Rejected` is the normal "not now" answer. `ConfigurationInvalid` means
/// the table itself is broken and the flow cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError<S: State, E: Event> {
    #[error("event '{}' rejected in state '{}'", .event.name(), .state.name())]
    Rejected { state: S, event: E },

    #[error(
        "state machine configuration invalid: {} ('{}' via event '{}')",
        .defect,
        .target.name(),
        .event.name()
    )]
    ConfigurationInvalid {
        target: S,
        event: E,
        defect: ConfigDefect,
    },

    #[error("event '{}' sent from inside an action of the same machine", .event.name())]
    Reentrant { event: E },

    #[error("chain stopped after {limit} hops in state '{}'", .state.name())]
    HopLimitExceeded { limit: NonZeroUsize, state: S },
}

impl<S: State, E: Event> MachineError<S, E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected { .. } => ErrorKind::Rejected,
            Self::ConfigurationInvalid { .. } => ErrorKind::ConfigurationInvalid,
            Self::Reentrant { .. } => ErrorKind::Reentrant,
            Self::HopLimitExceeded { .. } => ErrorKind::HopLimitExceeded,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.kind() == ErrorKind::Rejected
    }

    pub fn is_configuration_invalid(&self) -> bool {
        self.kind() == ErrorKind::ConfigurationInvalid
    }
}

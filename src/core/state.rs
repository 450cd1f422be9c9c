//! State and event identifiers.
//!
//! States and events are opaque, comparable labels. Each kind reserves one
//! value: states reserve the initial pseudo-state a machine starts in, events
//! reserve the no-op that ends a chain of transitions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in errors and diagnostics
/// - `Serialize` + `Deserialize`: states are recorded in transition history
/// - `Send` + `Sync`: machines are shared across threads
///
/// # Example
///
/// ```rust
/// use statechain::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Unset,
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Unset => "Unset",
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn initial() -> Self {
///         Self::Unset
///     }
/// }
///
/// assert!(Door::Unset.is_initial());
/// assert!(!Door::Open.is_initial());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// The pseudo-state every machine starts in.
    ///
    /// It is never entered through a transition, so it carries no action
    /// and must not appear as the target of any event.
    fn initial() -> Self;

    /// Check if this is the initial pseudo-state.
    fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

/// Trait for event identifiers.
///
/// # Example
///
/// ```rust
/// use statechain::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Nothing,
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Nothing => "Nothing",
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
///
///     fn no_op() -> Self {
///         Self::Nothing
///     }
/// }
///
/// assert!(DoorEvent::Nothing.is_no_op());
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;

    /// The reserved event an action returns to stop chaining.
    ///
    /// It is never a key in an event map, so submitting it directly is
    /// always rejected.
    fn no_op() -> Self;

    /// Check if this is the reserved no-op event.
    fn is_no_op(&self) -> bool {
        *self == Self::no_op()
    }
}

/// String-labelled state identifier.
///
/// The initial pseudo-state is the empty label, [`StateId::DEFAULT`].
///
/// ```rust
/// use statechain::core::{State, StateId};
///
/// const OFF: StateId = StateId::from_static("Off");
///
/// assert_eq!(OFF.name(), "Off");
/// assert_eq!(StateId::initial(), StateId::DEFAULT);
/// assert_eq!(StateId::new(String::from("Off")), OFF);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(Cow<'static, str>);

impl StateId {
    /// The initial pseudo-state.
    pub const DEFAULT: StateId = StateId(Cow::Borrowed(""));

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn initial() -> Self {
        Self::DEFAULT
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StateId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// String-labelled event identifier.
///
/// The reserved no-op is the label `"NoOp"`, [`EventId::NO_OP`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Cow<'static, str>);

impl EventId {
    /// The reserved "stop chaining" event.
    pub const NO_OP: EventId = EventId(Cow::Borrowed("NoOp"));

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Event for EventId {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn no_op() -> Self {
        Self::NO_OP
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EventId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for EventId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Running,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }

        fn initial() -> Self {
            Self::Start
        }
    }

    #[test]
    fn initial_state_is_detected() {
        assert!(TestState::Start.is_initial());
        assert!(!TestState::Running.is_initial());
        assert!(!TestState::Done.is_initial());
    }

    #[test]
    fn state_id_default_is_empty_label() {
        assert_eq!(StateId::initial().as_str(), "");
        assert_eq!(StateId::default(), StateId::DEFAULT);
        assert!(StateId::DEFAULT.is_initial());
        assert!(!StateId::from("Off").is_initial());
    }

    #[test]
    fn state_id_compares_by_label() {
        let borrowed = StateId::from_static("On");
        let owned = StateId::from(String::from("On"));

        assert_eq!(borrowed, owned);
        assert_ne!(borrowed, StateId::from("Off"));
    }

    #[test]
    fn event_id_no_op_is_reserved_label() {
        assert_eq!(EventId::no_op().as_str(), "NoOp");
        assert!(EventId::from("NoOp").is_no_op());
        assert!(!EventId::from("SwitchOn").is_no_op());
    }

    #[test]
    fn identifiers_display_their_label() {
        assert_eq!(StateId::from("Off").to_string(), "Off");
        assert_eq!(EventId::from("SwitchOff").to_string(), "SwitchOff");
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let json = serde_json::to_string(&StateId::from("Off")).unwrap();
        assert_eq!(json, "\"Off\"");

        let event: EventId = serde_json::from_str("\"SwitchOn\"").unwrap();
        assert_eq!(event, EventId::from("SwitchOn"));
    }
}

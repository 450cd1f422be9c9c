//! Entry actions.

use std::sync::Arc;

/// Logic executed once each time its state is entered.
///
/// The action receives the caller's context and returns the next event to
/// raise automatically, or the no-op event to stop. Any
/// `Fn(&mut C) -> E + Send + Sync` closure is an action.
///
/// Actions run while the machine's submission guard is held. They must not
/// block indefinitely and must not submit events to the machine that is
/// running them.
///
/// # Example
///
/// ```rust
/// use statechain::core::{Action, EventId};
///
/// struct Greeter;
///
/// impl Action<Vec<String>, EventId> for Greeter {
///     fn execute(&self, log: &mut Vec<String>) -> EventId {
///         log.push("hello".to_string());
///         EventId::NO_OP
///     }
/// }
///
/// let mut log = Vec::new();
/// assert_eq!(Greeter.execute(&mut log), EventId::NO_OP);
/// assert_eq!(log, vec!["hello".to_string()]);
/// ```
pub trait Action<C, E>: Send + Sync {
    fn execute(&self, ctx: &mut C) -> E;
}

impl<C, E, F> Action<C, E> for F
where
    F: Fn(&mut C) -> E + Send + Sync,
{
    fn execute(&self, ctx: &mut C) -> E {
        self(ctx)
    }
}

/// Shared handle to an action, as stored in a state entry.
pub type SharedAction<C, E> = Arc<dyn Action<C, E>>;

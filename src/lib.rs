//! Statechain: an embeddable finite state machine engine
//!
//! A caller declares states, the events each state accepts, the state each
//! event leads to, and an action to run on entering a state. The engine
//! drives transitions for events sent from outside, runs entry actions, and
//! keeps following the events those actions raise until the flow settles.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque labels via the `State` and `Event` traits,
//!   each with one reserved value (initial pseudo-state, no-op event)
//! - **Action**: logic run on entering a state, returning the next event
//! - **TransitionTable**: state -> (action, event -> state)
//! - **StateMachine**: runs a table, one submission at a time
//!
//! # Example
//!
//! ```rust
//! use statechain::{event_enum, state_enum};
//! use statechain::machine::StateMachine;
//! use statechain::table::{StateEntry, TransitionTable};
//!
//! state_enum! {
//!     enum Order {
//!         Start,
//!         Creating,
//!         Failed,
//!         Placed,
//!     }
//!     initial: Start
//! }
//!
//! event_enum! {
//!     enum Step {
//!         NoOp,
//!         Create,
//!         Fail,
//!         Place,
//!     }
//!     no_op: NoOp
//! }
//!
//! let table = TransitionTable::builder()
//!     .initial(StateEntry::new().on(Step::Create, Order::Creating))
//!     .state(
//!         Order::Creating,
//!         StateEntry::new()
//!             .on_entry(|items: &mut Vec<String>| {
//!                 if items.is_empty() { Step::Fail } else { Step::Place }
//!             })
//!             .on(Step::Fail, Order::Failed)
//!             .on(Step::Place, Order::Placed),
//!     )
//!     .state(Order::Failed, StateEntry::new().on_entry(|_: &mut Vec<String>| Step::NoOp))
//!     .state(Order::Placed, StateEntry::new().on_entry(|_: &mut Vec<String>| Step::NoOp))
//!     .build_validated()
//!     .unwrap();
//!
//! let machine = StateMachine::new(table);
//! machine.send_event(Step::Create, &mut vec!["book".to_string()]).unwrap();
//! assert_eq!(machine.current(), Order::Placed);
//! assert_eq!(machine.previous(), Order::Creating);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, TableBuilder};
pub use crate::core::{Action, Event, EventId, State, StateHistory, StateId, StateTransition};
pub use machine::{ConfigDefect, ErrorKind, MachineConfig, MachineError, StateMachine};
pub use table::{StateEntry, TableDefect, TransitionTable};

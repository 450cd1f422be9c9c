//! Light Switch
//!
//! The smallest useful table: two states toggled by two events.
//!
//! Key concepts:
//! - String identifiers (`StateId` / `EventId`)
//! - Rejected events leave the machine where it was
//! - Entry actions that stop the chain with the no-op event
//!
//! Run with: RUST_LOG=debug cargo run --example light_switch

use statechain::core::{EventId, StateId};
use statechain::machine::StateMachine;
use statechain::table::{StateEntry, TransitionTable};
use tracing_subscriber::EnvFilter;

const OFF: StateId = StateId::from_static("Off");
const ON: StateId = StateId::from_static("On");

const SWITCH_OFF: EventId = EventId::from_static("SwitchOff");
const SWITCH_ON: EventId = EventId::from_static("SwitchOn");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch Example ===\n");

    let table = TransitionTable::builder()
        .initial(StateEntry::new().on(SWITCH_OFF, OFF))
        .state(
            OFF,
            StateEntry::new()
                .on_entry(|_: &mut ()| {
                    println!("The light has been switched off");
                    EventId::NO_OP
                })
                .on(SWITCH_ON, ON),
        )
        .state(
            ON,
            StateEntry::new()
                .on_entry(|_: &mut ()| {
                    println!("The light has been switched on");
                    EventId::NO_OP
                })
                .on(SWITCH_OFF, OFF),
        )
        .build_validated();

    let table = match table {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Invalid table: {}", err);
            return;
        }
    };

    let machine = StateMachine::new(table);

    for event in [SWITCH_OFF, SWITCH_OFF, SWITCH_ON, SWITCH_ON, SWITCH_OFF] {
        match machine.send_event(event.clone(), &mut ()) {
            Ok(()) => println!("{} -> now {}", event, machine.current()),
            Err(err) => println!("{} -> {}", event, err),
        }
    }

    println!("\n=== Example Complete ===");
}

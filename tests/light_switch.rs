//! Two-state light switch driven by string identifiers.

use statechain::core::{EventId, StateId};
use statechain::machine::{MachineError, StateMachine};
use statechain::table::{StateEntry, TransitionTable};

const OFF: StateId = StateId::from_static("Off");
const ON: StateId = StateId::from_static("On");

const SWITCH_OFF: EventId = EventId::from_static("SwitchOff");
const SWITCH_ON: EventId = EventId::from_static("SwitchOn");

/// Lines "printed" by the entry actions.
type Output = Vec<&'static str>;

fn light_switch() -> StateMachine<StateId, EventId, Output> {
    let table = TransitionTable::builder()
        .initial(StateEntry::new().on(SWITCH_OFF, OFF))
        .state(
            OFF,
            StateEntry::new()
                .on_entry(|out: &mut Output| {
                    out.push("The light has been switched off");
                    EventId::NO_OP
                })
                .on(SWITCH_ON, ON),
        )
        .state(
            ON,
            StateEntry::new()
                .on_entry(|out: &mut Output| {
                    out.push("The light has been switched on");
                    EventId::NO_OP
                })
                .on(SWITCH_OFF, OFF),
        )
        .build_validated()
        .unwrap();

    StateMachine::new(table)
}

#[test]
fn light_switch_scenario() {
    let machine = light_switch();
    let mut out = Output::new();

    machine.send_event(SWITCH_OFF, &mut out).unwrap();
    assert_eq!(machine.current(), OFF);

    let err = machine.send_event(SWITCH_OFF, &mut out).unwrap_err();
    assert!(err.is_rejected());
    assert_eq!(machine.current(), OFF);

    machine.send_event(SWITCH_ON, &mut out).unwrap();
    assert_eq!(machine.current(), ON);
    assert_eq!(machine.previous(), OFF);

    let err = machine.send_event(SWITCH_ON, &mut out).unwrap_err();
    assert_eq!(
        err,
        MachineError::Rejected {
            state: ON,
            event: SWITCH_ON,
        }
    );
    assert_eq!(machine.current(), ON);

    machine.send_event(SWITCH_OFF, &mut out).unwrap();
    assert_eq!(machine.current(), OFF);
    assert_eq!(machine.previous(), ON);

    assert_eq!(
        out,
        vec![
            "The light has been switched off",
            "The light has been switched on",
            "The light has been switched off",
        ]
    );
}

#[test]
fn switching_on_first_is_rejected() {
    let machine = light_switch();
    let mut out = Output::new();

    let err = machine.send_event(SWITCH_ON, &mut out).unwrap_err();

    assert!(err.is_rejected());
    assert_eq!(machine.current(), StateId::DEFAULT);
    assert!(out.is_empty());
}

#[test]
fn unknown_event_is_rejected() {
    let machine = light_switch();

    let err = machine
        .send_event(EventId::from("Dim"), &mut Output::new())
        .unwrap_err();

    assert!(err.is_rejected());
}

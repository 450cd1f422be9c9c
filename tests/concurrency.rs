//! Serialization of submissions across threads, and re-entrancy refusal.

use parking_lot::Mutex;
use statechain::machine::{ErrorKind, MachineError, StateMachine};
use statechain::table::{StateEntry, TransitionTable};
use statechain::{event_enum, state_enum};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

state_enum! {
    enum Stage {
        Idle,
        First,
        Second,
        Third,
    }
    initial: Idle
}

event_enum! {
    enum Tick {
        NoOp,
        Begin,
        Advance,
        Restart,
    }
    no_op: NoOp
}

/// Per-caller context; every action appends (caller, stage) to the shared log.
struct Caller {
    tag: usize,
    log: Arc<Mutex<Vec<(usize, Stage)>>>,
}

fn record(stage: Stage, next: Tick) -> impl Fn(&mut Caller) -> Tick {
    move |caller: &mut Caller| {
        caller.log.lock().push((caller.tag, stage));
        thread::sleep(Duration::from_millis(1));
        next
    }
}

/// Idle/Third -Begin/Restart-> First -> Second -> Third, three hops per call.
fn cycle() -> TransitionTable<Stage, Tick, Caller> {
    TransitionTable::builder()
        .initial(StateEntry::new().on(Tick::Begin, Stage::First))
        .state(
            Stage::First,
            StateEntry::new()
                .on_entry(record(Stage::First, Tick::Advance))
                .on(Tick::Advance, Stage::Second),
        )
        .state(
            Stage::Second,
            StateEntry::new()
                .on_entry(record(Stage::Second, Tick::Advance))
                .on(Tick::Advance, Stage::Third),
        )
        .state(
            Stage::Third,
            StateEntry::new()
                .on_entry(record(Stage::Third, Tick::NoOp))
                .on(Tick::Restart, Stage::First)
                .on(Tick::Begin, Stage::First),
        )
        .build_validated()
        .unwrap()
}

#[test]
fn concurrent_chains_never_interleave() {
    let machine = Arc::new(StateMachine::new(cycle()));
    let log = Arc::new(Mutex::new(Vec::new()));
    let callers = 4;
    let rounds = 5;
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|tag| {
            let machine = Arc::clone(&machine);
            let barrier = Arc::clone(&barrier);
            let mut caller = Caller {
                tag,
                log: Arc::clone(&log),
            };
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..rounds {
                    machine.send_event(Tick::Begin, &mut caller).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let log = log.lock();
    assert_eq!(log.len(), callers * rounds * 3);
    for chain in log.chunks(3) {
        let tag = chain[0].0;
        assert!(chain.iter().all(|(t, _)| *t == tag), "interleaved: {chain:?}");
        let stages: Vec<_> = chain.iter().map(|(_, s)| *s).collect();
        assert_eq!(stages, vec![Stage::First, Stage::Second, Stage::Third]);
    }
    assert_eq!(machine.current(), Stage::Third);
    assert_eq!(machine.previous(), Stage::Second);
}

#[tokio::test]
async fn blocking_tasks_share_a_machine() {
    let machine = Arc::new(StateMachine::new(cycle()));
    let log = Arc::new(Mutex::new(Vec::new()));

    let tasks: Vec<_> = (0..3)
        .map(|tag| {
            let machine = Arc::clone(&machine);
            let mut caller = Caller {
                tag,
                log: Arc::clone(&log),
            };
            tokio::task::spawn_blocking(move || machine.send_event(Tick::Begin, &mut caller))
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let log = log.lock();
    assert_eq!(log.len(), 9);
    for chain in log.chunks(3) {
        assert!(chain.iter().all(|(t, _)| *t == chain[0].0));
    }
}

/// Context whose action tries to send an event back into its own machine.
#[derive(Default)]
struct Nested {
    machine: Option<Arc<StateMachine<Stage, Tick, Nested>>>,
    inner: Option<Result<(), MachineError<Stage, Tick>>>,
    entered: Vec<Stage>,
}

fn reentrant() -> TransitionTable<Stage, Tick, Nested> {
    TransitionTable::builder()
        .initial(StateEntry::new().on(Tick::Begin, Stage::First))
        .state(
            Stage::First,
            StateEntry::new()
                .on_entry(|ctx: &mut Nested| {
                    ctx.entered.push(Stage::First);
                    if let Some(machine) = ctx.machine.clone() {
                        ctx.inner = Some(machine.send_event(Tick::Advance, &mut Nested::default()));
                        // the submission in progress is visible from inside
                        assert_eq!(machine.current(), Stage::First);
                    }
                    Tick::Advance
                })
                .on(Tick::Advance, Stage::Second),
        )
        .state(
            Stage::Second,
            StateEntry::new().on_entry(|ctx: &mut Nested| {
                ctx.entered.push(Stage::Second);
                Tick::NoOp
            }),
        )
        .build()
        .unwrap()
}

#[test]
fn reentrant_submission_is_refused() {
    let machine = Arc::new(StateMachine::new(reentrant()));
    let mut ctx = Nested {
        machine: Some(Arc::clone(&machine)),
        ..Nested::default()
    };

    machine.send_event(Tick::Begin, &mut ctx).unwrap();

    let inner = ctx.inner.take().unwrap().unwrap_err();
    assert_eq!(inner.kind(), ErrorKind::Reentrant);
    assert_eq!(inner, MachineError::Reentrant { event: Tick::Advance });
    assert_eq!(ctx.entered, vec![Stage::First, Stage::Second]);
    assert_eq!(machine.current(), Stage::Second);

    // guard is free again once the outer chain returns
    let err = machine.send_event(Tick::Begin, &mut Nested::default()).unwrap_err();
    assert!(err.is_rejected());
}

#[test]
fn panicking_action_releases_the_machine() {
    let table = TransitionTable::builder()
        .initial(StateEntry::new().on(Tick::Begin, Stage::First))
        .state(
            Stage::First,
            StateEntry::new()
                .on_entry(|fail: &mut bool| {
                    if *fail {
                        panic!("action failed");
                    }
                    Tick::NoOp
                })
                .on(Tick::Restart, Stage::First),
        )
        .build()
        .unwrap();
    let machine = StateMachine::new(table);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        machine.send_event(Tick::Begin, &mut true)
    }));
    assert!(result.is_err());

    // the hop committed before the panic is kept
    assert_eq!(machine.current(), Stage::First);
    machine.send_event(Tick::Restart, &mut false).unwrap();
    assert_eq!(machine.previous(), Stage::First);
}

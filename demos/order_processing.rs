//! Order Processing
//!
//! Entry actions inspect the order and pick the next event themselves, so a
//! single submission can walk several states.
//!
//! Key concepts:
//! - Enum identifiers via `state_enum!` / `event_enum!`
//! - Chained transitions raised by actions
//! - Actions reporting problems back through the context
//! - Hop history for diagnostics
//!
//! Run with: RUST_LOG=debug cargo run --example order_processing

use statechain::machine::StateMachine;
use statechain::table::{StateEntry, TransitionTable};
use statechain::{event_enum, state_enum};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum OrderState {
        Default,
        CreatingOrder,
        OrderFailed,
        OrderPlaced,
        ChargingCard,
        TransactionFailed,
        OrderShipped,
    }
    initial: Default
}

event_enum! {
    enum OrderEvent {
        NoOp,
        CreateOrder,
        FailOrder,
        PlaceOrder,
        ChargeCard,
        FailTransaction,
        ShipOrder,
    }
    no_op: NoOp
}

#[derive(Debug, Default)]
struct Order {
    items: Vec<String>,
    card_number: String,
    address: String,
    error: Option<String>,
}

fn creating_order(order: &mut Order) -> OrderEvent {
    println!("Validating order: {:?}", order.items);
    if order.items.is_empty() {
        order.error = Some("insufficient number of items in order".to_string());
        return OrderEvent::FailOrder;
    }
    OrderEvent::PlaceOrder
}

fn order_failed(order: &mut Order) -> OrderEvent {
    println!("Order failed: {}", order.error.as_deref().unwrap_or("unknown"));
    OrderEvent::NoOp
}

fn order_placed(order: &mut Order) -> OrderEvent {
    println!("Order placed, items: {:?}", order.items);
    OrderEvent::NoOp
}

fn charging_card(order: &mut Order) -> OrderEvent {
    println!("Validating card for shipment to {}", order.address);
    if order.card_number.is_empty() {
        order.error = Some("card number is invalid".to_string());
        return OrderEvent::FailTransaction;
    }
    OrderEvent::ShipOrder
}

fn transaction_failed(order: &mut Order) -> OrderEvent {
    println!("Transaction failed: {}", order.error.as_deref().unwrap_or("unknown"));
    OrderEvent::NoOp
}

fn order_shipped(order: &mut Order) -> OrderEvent {
    println!("Order shipped to {}", order.address);
    OrderEvent::NoOp
}

fn order_table() -> TransitionTable<OrderState, OrderEvent, Order> {
    use OrderEvent::*;
    use OrderState::*;

    let table = TransitionTable::builder()
        .initial(StateEntry::new().on(CreateOrder, CreatingOrder))
        .state(
            CreatingOrder,
            StateEntry::new()
                .on_entry(creating_order)
                .on(FailOrder, OrderFailed)
                .on(PlaceOrder, OrderPlaced),
        )
        .state(
            OrderFailed,
            StateEntry::new()
                .on_entry(order_failed)
                .on(CreateOrder, CreatingOrder),
        )
        .state(
            OrderPlaced,
            StateEntry::new()
                .on_entry(order_placed)
                .on(ChargeCard, ChargingCard),
        )
        .state(
            ChargingCard,
            StateEntry::new()
                .on_entry(charging_card)
                .on(FailTransaction, TransactionFailed)
                .on(ShipOrder, OrderShipped),
        )
        .state(
            TransactionFailed,
            StateEntry::new()
                .on_entry(transaction_failed)
                .on(ChargeCard, ChargingCard),
        )
        .state(OrderShipped, StateEntry::new().on_entry(order_shipped))
        .build_validated();

    match table {
        Ok(table) => table,
        Err(err) => panic!("order table is malformed: {}", err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Processing Example ===\n");

    let machine = StateMachine::builder(order_table())
        .record_history(Some(32))
        .build();

    println!("1. Creating an empty order");
    let mut order = Order::default();
    if let Err(err) = machine.send_event(OrderEvent::CreateOrder, &mut order) {
        println!("   error: {}", err);
    }
    println!("   state: {}\n", machine.current());

    println!("2. Retrying with items");
    order.items = vec!["book".to_string(), "lamp".to_string()];
    order.error = None;
    if let Err(err) = machine.send_event(OrderEvent::CreateOrder, &mut order) {
        println!("   error: {}", err);
    }
    println!("   state: {}\n", machine.current());

    println!("3. Charging without a card");
    order.address = "12 Example Street".to_string();
    if let Err(err) = machine.send_event(OrderEvent::ChargeCard, &mut order) {
        println!("   error: {}", err);
    }
    println!("   state: {}\n", machine.current());

    println!("4. Charging with a card");
    order.card_number = "4111-1111-1111-1111".to_string();
    order.error = None;
    if let Err(err) = machine.send_event(OrderEvent::ChargeCard, &mut order) {
        println!("   error: {}", err);
    }
    println!("   state: {}\n", machine.current());

    println!("5. Shipping again is rejected");
    if let Err(err) = machine.send_event(OrderEvent::ChargeCard, &mut order) {
        println!("   error: {}", err);
    }

    if let Some(history) = machine.history() {
        println!("\nPath:");
        for state in history.get_path() {
            println!("  {}", state);
        }
    }

    println!("\n=== Example Complete ===");
}

//! Order workflow state machine.

mod action;
mod entity;
mod handlers;
mod machine;
mod status;

pub use action::{ActionOutcome, OrderAction, OutcomeKind, Reaction};
pub use entity::{LineItem, Order};
pub use handlers::{
    CancelledState, DeliveredState, OrderState, PendingState, ProcessingState, ShippedState,
};
pub use machine::{OrderContext, OrderStateMachine};
pub use status::OrderStatus;

//! State handlers, one per order status.
//!
//! Handlers are stateless and shared across all orders. Every handler
//! defines all three operations; an operation that makes no sense in a
//! state answers with [`Reaction::NoOp`] or [`Reaction::Refused`] instead
//! of being left out.

use super::{Order, OrderStatus, Reaction};

/// Behavior of an order while it is in one status.
pub trait OrderState: Send + Sync {
    /// The status this handler is registered under.
    fn status(&self) -> OrderStatus;

    fn process(&self, order: &mut Order) -> Reaction;

    fn cancel(&self, order: &mut Order) -> Reaction;

    fn complete(&self, order: &mut Order) -> Reaction;

    /// Returns the registry key for this handler.
    fn name(&self) -> &'static str {
        self.status().as_str()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PendingState;

impl OrderState for PendingState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Pending
    }

    fn process(&self, order: &mut Order) -> Reaction {
        order.set_status(OrderStatus::Processing);
        Reaction::Transitioned(format!(
            "order {} accepted, payment of {} captured",
            order.id().short(),
            order.total()
        ))
    }

    fn cancel(&self, order: &mut Order) -> Reaction {
        order.set_status(OrderStatus::Cancelled);
        Reaction::Transitioned("order cancelled before processing, nothing to refund".to_string())
    }

    fn complete(&self, _order: &mut Order) -> Reaction {
        Reaction::Refused("order has not been processed yet".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingState;

impl OrderState for ProcessingState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Processing
    }

    fn process(&self, _order: &mut Order) -> Reaction {
        Reaction::NoOp("order is already being processed".to_string())
    }

    fn cancel(&self, order: &mut Order) -> Reaction {
        order.set_status(OrderStatus::Cancelled);
        Reaction::Transitioned(format!(
            "order cancelled during processing, {} refunded",
            order.total()
        ))
    }

    fn complete(&self, order: &mut Order) -> Reaction {
        order.set_status(OrderStatus::Shipped);
        let units: u32 = order.items().iter().map(|i| i.quantity).sum();
        Reaction::Transitioned(format!("{units} unit(s) handed to the carrier"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShippedState;

impl OrderState for ShippedState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Shipped
    }

    fn process(&self, _order: &mut Order) -> Reaction {
        Reaction::NoOp("order has already shipped".to_string())
    }

    fn cancel(&self, _order: &mut Order) -> Reaction {
        Reaction::Refused("order has already shipped".to_string())
    }

    fn complete(&self, order: &mut Order) -> Reaction {
        order.set_status(OrderStatus::Delivered);
        Reaction::Transitioned("carrier confirmed delivery".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveredState;

impl OrderState for DeliveredState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Delivered
    }

    fn process(&self, _order: &mut Order) -> Reaction {
        Reaction::NoOp("order has already been delivered".to_string())
    }

    fn cancel(&self, _order: &mut Order) -> Reaction {
        Reaction::Refused("delivered orders cannot be cancelled".to_string())
    }

    fn complete(&self, _order: &mut Order) -> Reaction {
        Reaction::NoOp("order is already delivered".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CancelledState;

impl OrderState for CancelledState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Cancelled
    }

    fn process(&self, _order: &mut Order) -> Reaction {
        Reaction::Refused("cancelled orders cannot be processed".to_string())
    }

    fn cancel(&self, _order: &mut Order) -> Reaction {
        Reaction::NoOp("order is already cancelled".to_string())
    }

    fn complete(&self, _order: &mut Order) -> Reaction {
        Reaction::Refused("cancelled orders cannot be completed".to_string())
    }
}

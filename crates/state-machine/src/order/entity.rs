//! Order entity and line items.

use common::{EntityId, Money};
use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// An item in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product SKU.
    pub product_id: String,

    /// Human-readable product name.
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the total price for this item (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// An order driven through the state machine.
///
/// `status` is the single source of truth for the current state. It is kept
/// as a label so orders reconstructed from external input can carry a value
/// no handler is registered for; the machine rejects those on lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: EntityId,
    status: String,
    items: Vec<LineItem>,
    total: Money,
}

impl Order {
    /// Creates a new `Pending` order.
    pub fn new(items: Vec<LineItem>) -> Self {
        Self::with_status(OrderStatus::Pending.as_str(), items)
    }

    /// Creates an order with an arbitrary status label.
    pub fn with_status(status: impl Into<String>, items: Vec<LineItem>) -> Self {
        let total = items.iter().map(LineItem::total_price).sum();
        Self {
            id: EntityId::new(),
            status: status.into(),
            items,
            total,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the current status label.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Moves the order to `status`. Only state handlers should call this.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status.as_str().to_string();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

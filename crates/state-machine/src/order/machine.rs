//! State registry and per-order context.

use std::collections::HashMap;

use super::handlers::{CancelledState, DeliveredState, PendingState, ProcessingState, ShippedState};
use super::{ActionOutcome, Order, OrderAction, OrderState, OrderStatus};
use crate::error::{Result, StateMachineError};

/// Registry mapping status labels to their state handlers.
///
/// The registry holds no per-order data and can drive any number of
/// orders through [`OrderContext`].
pub struct OrderStateMachine {
    states: HashMap<&'static str, Box<dyn OrderState>>,
}

impl OrderStateMachine {
    /// Creates a machine with all five order states registered.
    pub fn new() -> Self {
        Self::empty()
            .register(PendingState)
            .register(ProcessingState)
            .register(ShippedState)
            .register(DeliveredState)
            .register(CancelledState)
    }

    /// Creates a machine with no states registered.
    pub fn empty() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Registers `state` under its name, replacing any previous handler.
    pub fn register<H: OrderState + 'static>(mut self, state: H) -> Self {
        self.states.insert(state.name(), Box::new(state));
        self
    }

    /// Looks up the handler for a status label.
    pub fn resolve(&self, status: &str) -> Result<&dyn OrderState> {
        self.states
            .get(status)
            .map(|state| state.as_ref())
            .ok_or_else(|| StateMachineError::UnknownState {
                status: status.to_string(),
            })
    }

    /// Returns the registered status names, in lifecycle order.
    pub fn state_names(&self) -> Vec<&'static str> {
        OrderStatus::ALL
            .iter()
            .map(OrderStatus::as_str)
            .filter(|name| self.states.contains_key(name))
            .collect()
    }

    /// Binds `order` to this machine.
    ///
    /// Fails with [`StateMachineError::UnknownState`] if the order's status
    /// has no handler.
    pub fn context(&self, order: Order) -> Result<OrderContext<'_>> {
        self.resolve(order.status())?;
        Ok(OrderContext {
            machine: self,
            order,
        })
    }

    /// Applies `actions` in order and returns the final order with one
    /// outcome per action.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn run(&self, order: Order, actions: &[OrderAction]) -> Result<(Order, Vec<ActionOutcome>)> {
        let mut ctx = self.context(order)?;
        let mut outcomes = Vec::with_capacity(actions.len());
        for &action in actions {
            outcomes.push(ctx.apply(action)?);
        }
        Ok((ctx.into_order(), outcomes))
    }
}

impl Default for OrderStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrderStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStateMachine")
            .field("states", &self.state_names())
            .finish()
    }
}

/// One order bound to a state machine.
///
/// The handler is looked up from the order's status label on every call, so
/// the status is the only record of the current state. An order whose label
/// has no handler is never touched again.
pub struct OrderContext<'m> {
    machine: &'m OrderStateMachine,
    order: Order,
}

impl<'m> OrderContext<'m> {
    pub fn process(&mut self) -> Result<ActionOutcome> {
        self.apply(OrderAction::Process)
    }

    pub fn cancel(&mut self) -> Result<ActionOutcome> {
        self.apply(OrderAction::Cancel)
    }

    pub fn complete(&mut self) -> Result<ActionOutcome> {
        self.apply(OrderAction::Complete)
    }

    /// Delegates `action` to the handler for the order's status.
    ///
    /// Fails with [`StateMachineError::UnknownState`] before any handler runs
    /// if the status is unregistered, or after the handler ran if it moved
    /// the order into an unregistered status.
    pub fn apply(&mut self, action: OrderAction) -> Result<ActionOutcome> {
        let current = self.current()?;
        let from = current.status();
        let reaction = match action {
            OrderAction::Process => current.process(&mut self.order),
            OrderAction::Cancel => current.cancel(&mut self.order),
            OrderAction::Complete => current.complete(&mut self.order),
        };

        let to = self.current()?.status();
        let kind = reaction.kind();

        metrics::counter!(
            "order_transitions_total",
            "action" => action.as_str(),
            "outcome" => kind.as_str()
        )
        .increment(1);
        tracing::debug!(
            order_id = %self.order.id(),
            %action,
            %from,
            %to,
            outcome = kind.as_str(),
            "order action applied"
        );

        Ok(ActionOutcome {
            action,
            from,
            to,
            kind,
            message: reaction.into_message(),
        })
    }

    /// Returns the status of the handler currently in charge.
    pub fn current_status(&self) -> Result<OrderStatus> {
        self.current().map(|state| state.status())
    }

    fn current(&self) -> Result<&'m dyn OrderState> {
        self.machine.resolve(self.order.status())
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OutcomeKind;

    #[test]
    fn test_new_registers_all_statuses() {
        let machine = OrderStateMachine::new();
        assert_eq!(
            machine.state_names(),
            vec!["Pending", "Processing", "Shipped", "Delivered", "Cancelled"]
        );
    }

    #[test]
    fn test_resolve_unknown_label() {
        let machine = OrderStateMachine::new();
        let err = machine.resolve("pending").err().unwrap();
        assert_eq!(
            err,
            StateMachineError::UnknownState {
                status: "pending".to_string()
            }
        );
    }

    #[test]
    fn test_context_rejects_unregistered_status() {
        let machine = OrderStateMachine::new();
        let result = machine.context(Order::with_status("Teleported", vec![]));
        assert!(matches!(
            result,
            Err(StateMachineError::UnknownState { status }) if status == "Teleported"
        ));
    }

    #[test]
    fn test_context_re_resolves_after_transition() {
        let machine = OrderStateMachine::new();
        let mut ctx = machine.context(Order::new(vec![])).unwrap();

        let first = ctx.process().unwrap();
        assert_eq!(first.kind, OutcomeKind::Transitioned);
        assert_eq!(ctx.current_status(), Ok(OrderStatus::Processing));

        // The second call is answered by the Processing handler.
        let second = ctx.process().unwrap();
        assert_eq!(second.kind, OutcomeKind::NoOp);
        assert_eq!(second.from, OrderStatus::Processing);
    }

    #[test]
    fn test_transition_into_unregistered_state_errors() {
        let machine = OrderStateMachine::empty().register(PendingState);
        let mut ctx = machine.context(Order::new(vec![])).unwrap();

        let err = ctx.process().unwrap_err();
        assert_eq!(
            err,
            StateMachineError::UnknownState {
                status: "Processing".to_string()
            }
        );
    }

    #[test]
    fn test_unregistered_status_freezes_the_order() {
        let machine = OrderStateMachine::empty().register(PendingState);
        let mut ctx = machine.context(Order::new(vec![])).unwrap();
        assert!(ctx.process().is_err());
        assert_eq!(ctx.order().status(), "Processing");

        // Pending's handler must not answer for an order that left Pending.
        for action in [OrderAction::Process, OrderAction::Cancel, OrderAction::Complete] {
            assert_eq!(
                ctx.apply(action).unwrap_err(),
                StateMachineError::UnknownState {
                    status: "Processing".to_string()
                }
            );
            assert_eq!(ctx.order().status(), "Processing");
        }
        assert!(ctx.current_status().is_err());
    }

    #[test]
    fn test_run_returns_outcome_per_action() {
        let machine = OrderStateMachine::new();
        let (order, outcomes) = machine
            .run(
                Order::new(vec![]),
                &[OrderAction::Process, OrderAction::Complete, OrderAction::Complete],
            )
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(order.status(), "Delivered");
    }
}

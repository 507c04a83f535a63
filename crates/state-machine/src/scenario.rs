//! Demonstration runners for the state pattern engines.

use common::{DemoReport, Money};
use serde::Serialize;

use crate::error::Result;
use crate::order::{ActionOutcome, LineItem, Order, OrderAction, OrderStateMachine};
use crate::traffic_light::{LightPhase, TrafficLight};

pub const PATTERN: &str = "State";

/// Action script used when the caller supplies none.
pub const DEFAULT_ORDER_ACTIONS: [OrderAction; 4] = [
    OrderAction::Process,
    OrderAction::Complete,
    OrderAction::Complete,
    OrderAction::Cancel,
];

/// Number of advances used when the caller supplies none.
pub const DEFAULT_LIGHT_STEPS: usize = 3;

/// Sample basket for the order demonstration.
pub fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem::new("SKU-1001", "Mechanical keyboard", 1, Money::from_cents(8_999)),
        LineItem::new("SKU-2040", "USB-C cable", 2, Money::from_cents(1_250)),
    ]
}

/// Caller-supplied parameters for the order demonstration.
#[derive(Debug, Clone, Default)]
pub struct OrderScenario {
    /// Starting status label; `Pending` when absent.
    pub status: Option<String>,
    /// Line items; [`sample_items`] when empty.
    pub items: Vec<LineItem>,
    /// Actions to apply; [`DEFAULT_ORDER_ACTIONS`] when empty.
    pub actions: Vec<OrderAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderDemoResult {
    pub order: Order,
    pub outcomes: Vec<ActionOutcome>,
}

/// Drives one order through the caller's action script.
pub fn run_order_demo(
    machine: &OrderStateMachine,
    scenario: OrderScenario,
) -> Result<DemoReport<OrderDemoResult>> {
    let items = if scenario.items.is_empty() {
        sample_items()
    } else {
        scenario.items
    };
    let order = match scenario.status {
        Some(status) => Order::with_status(status, items),
        None => Order::new(items),
    };
    let actions = if scenario.actions.is_empty() {
        DEFAULT_ORDER_ACTIONS.to_vec()
    } else {
        scenario.actions
    };

    let mut steps = vec![format!(
        "order {} created in {} with total {}",
        order.id().short(),
        order.status(),
        order.total()
    )];

    let (order, outcomes) = machine.run(order, &actions)?;
    steps.extend(outcomes.iter().map(ActionOutcome::describe));
    steps.push(format!("final status: {}", order.status()));

    Ok(
        DemoReport::new(PATTERN, "order lifecycle", OrderDemoResult { order, outcomes })
            .with_steps(steps),
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficLightResult {
    pub initial: LightPhase,
    pub phases: Vec<LightPhase>,
    pub final_phase: LightPhase,
}

/// Advances a fresh light `steps` times.
pub fn run_traffic_light_demo(steps: usize) -> DemoReport<TrafficLightResult> {
    let mut light = TrafficLight::new();
    let initial = light.current();

    let mut narration = vec![format!(
        "light starts {} for {}s ({})",
        initial.color, initial.duration_secs, initial.instruction
    )];
    let mut phases = Vec::with_capacity(steps);
    for step in 1..=steps {
        let phase = light.advance();
        narration.push(format!(
            "advance #{step}: {} for {}s ({})",
            phase.color, phase.duration_secs, phase.instruction
        ));
        phases.push(phase);
    }

    let result = TrafficLightResult {
        initial,
        phases,
        final_phase: light.current(),
    };
    DemoReport::new(PATTERN, "traffic light cycle", result).with_steps(narration)
}

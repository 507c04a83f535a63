//! State pattern demonstrations.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use common::{DemoReport, Money};
use serde::Deserialize;
use state_machine::{LineItem, OrderAction};
use state_machine::scenario::{
    self, DEFAULT_LIGHT_STEPS, OrderDemoResult, OrderScenario, TrafficLightResult,
};

use super::{ensure_within, record_run};
use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct OrderDemoRequest {
    /// Starting status label; `Pending` when absent.
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
    /// Action names: `process`, `cancel` or `complete`.
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl LineItemRequest {
    fn into_line_item(self) -> Result<LineItem, ApiError> {
        if self.quantity == 0 {
            return Err(ApiError::BadRequest(format!(
                "Quantity for {} must be at least 1",
                self.product_id
            )));
        }
        if self.unit_price_cents < 0 {
            return Err(ApiError::BadRequest(format!(
                "Unit price for {} must not be negative",
                self.product_id
            )));
        }

        Ok(LineItem::new(
            self.product_id,
            self.product_name,
            self.quantity,
            Money::from_cents(self.unit_price_cents),
        ))
    }
}

/// POST /demos/state/order: drives one order through an action script.
#[tracing::instrument(skip(state, req))]
pub async fn order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderDemoRequest>,
) -> Result<Json<DemoReport<OrderDemoResult>>, ApiError> {
    let max = state.config.demo_max_steps;
    ensure_within("actions", req.actions.len(), max)?;
    ensure_within("items", req.items.len(), max)?;

    let actions = req
        .actions
        .iter()
        .map(|a| a.parse::<OrderAction>())
        .collect::<Result<Vec<_>, _>>()?;
    let items = req
        .items
        .into_iter()
        .map(LineItemRequest::into_line_item)
        .collect::<Result<Vec<_>, _>>()?;

    let report = scenario::run_order_demo(
        &state.machine,
        OrderScenario {
            status: req.status,
            items,
            actions,
        },
    )?;

    record_run("state/order", report.steps.len());
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct TrafficLightQuery {
    pub steps: Option<usize>,
}

/// GET /demos/state/traffic-light?steps=N: advances the light N times.
#[tracing::instrument(skip(state))]
pub async fn traffic_light(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrafficLightQuery>,
) -> Result<Json<DemoReport<TrafficLightResult>>, ApiError> {
    let steps = query.steps.unwrap_or(DEFAULT_LIGHT_STEPS);
    let max = state.config.demo_max_steps;
    if steps == 0 || steps > max {
        return Err(ApiError::BadRequest(format!(
            "steps must be between 1 and {max}, got {steps}"
        )));
    }

    let report = scenario::run_traffic_light_demo(steps);
    record_run("state/traffic-light", report.steps.len());
    Ok(Json(report))
}

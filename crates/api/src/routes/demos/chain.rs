//! Chain of responsibility demonstrations.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::DemoReport;
use handler_chain::scenario::{self, ChainDemoResult};
use handler_chain::{ExpenseRequest, SupportTicket};
use serde::Deserialize;

use super::{ensure_within, record_run};
use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct SupportDemoRequest {
    #[serde(default)]
    pub tickets: Vec<TicketRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TicketRequest {
    pub kind: String,
    pub priority: u8,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExpenseDemoRequest {
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseItem {
    /// Whole dollars.
    pub amount: i64,
    pub purpose: String,
}

/// POST /demos/chain/support: routes tickets through the support chain.
#[tracing::instrument(skip(state, req), fields(tickets = req.tickets.len()))]
pub async fn support(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SupportDemoRequest>,
) -> Result<Json<DemoReport<ChainDemoResult<SupportTicket>>>, ApiError> {
    ensure_within("tickets", req.tickets.len(), state.config.demo_max_steps)?;

    let tickets = req
        .tickets
        .into_iter()
        .map(|t| SupportTicket::new(t.kind, t.priority, t.description))
        .collect::<Result<Vec<_>, _>>()?;

    let report = scenario::run_support_demo(tickets)?;
    record_run("chain/support", report.steps.len());
    Ok(Json(report))
}

/// POST /demos/chain/expense: routes expenses through the approval chain.
#[tracing::instrument(skip(state, req), fields(expenses = req.expenses.len()))]
pub async fn expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExpenseDemoRequest>,
) -> Result<Json<DemoReport<ChainDemoResult<ExpenseRequest>>>, ApiError> {
    ensure_within("expenses", req.expenses.len(), state.config.demo_max_steps)?;

    let expenses = req
        .expenses
        .into_iter()
        .map(|e| ExpenseRequest::dollars(e.amount, e.purpose))
        .collect::<Result<Vec<_>, _>>()?;

    let report = scenario::run_expense_demo(expenses)?;
    record_run("chain/expense", report.steps.len());
    Ok(Json(report))
}

//! Mediator demonstrations.

use std::collections::HashSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::DemoReport;
use mediator::scenario::{self, ChatDemoResult, ChatStep, TowerDemoResult, TowerStep};
use serde::Deserialize;

use super::{ensure_within, record_run};
use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ChatDemoRequest {
    pub room: Option<String>,
    #[serde(default)]
    pub script: Vec<ChatStep>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AirTrafficDemoRequest {
    /// Runway pool; the configured default when absent.
    pub runways: Option<Vec<String>>,
    #[serde(default)]
    pub script: Vec<TowerStep>,
}

/// POST /demos/mediator/chat: plays a chat script in a fresh room.
#[tracing::instrument(skip(state, req), fields(steps = req.script.len()))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatDemoRequest>,
) -> Result<Json<DemoReport<ChatDemoResult>>, ApiError> {
    ensure_within("script steps", req.script.len(), state.config.demo_max_steps)?;
    if req.room.as_deref().is_some_and(|r| r.trim().is_empty()) {
        return Err(ApiError::BadRequest("room must not be blank".to_string()));
    }

    let report = scenario::run_chat_demo(req.room, req.script)?;
    record_run("mediator/chat", report.steps.len());
    Ok(Json(report))
}

/// POST /demos/mediator/air-traffic: plays a tower script over a runway pool.
#[tracing::instrument(skip(state, req), fields(steps = req.script.len()))]
pub async fn air_traffic(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AirTrafficDemoRequest>,
) -> Result<Json<DemoReport<TowerDemoResult>>, ApiError> {
    let max = state.config.demo_max_steps;
    ensure_within("script steps", req.script.len(), max)?;

    let runways = match req.runways {
        Some(runways) => validate_runways(runways, max)?,
        None => state.config.atc_runways.clone(),
    };

    let report = scenario::run_tower_demo(runways, req.script)?;
    record_run("mediator/air-traffic", report.steps.len());
    Ok(Json(report))
}

fn validate_runways(runways: Vec<String>, max: usize) -> Result<Vec<String>, ApiError> {
    if runways.is_empty() {
        return Err(ApiError::BadRequest(
            "runways must list at least one runway".to_string(),
        ));
    }
    ensure_within("runways", runways.len(), max)?;

    let mut seen = HashSet::new();
    for name in &runways {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "runway names must not be blank".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(ApiError::BadRequest(format!("Duplicate runway: {name}")));
        }
    }
    Ok(runways)
}

//! Demonstration endpoints. Each request builds fresh engines, runs a
//! script and returns a [`common::DemoReport`].

pub mod chain;
pub mod mediator;
pub mod state;

use crate::error::ApiError;

/// Rejects caller-supplied scripts longer than `max`.
fn ensure_within(what: &str, len: usize, max: usize) -> Result<(), ApiError> {
    if len > max {
        return Err(ApiError::BadRequest(format!(
            "Too many {what}: {len} (at most {max})"
        )));
    }
    Ok(())
}

fn record_run(demo: &'static str, steps: usize) {
    metrics::counter!("demo_runs_total", "demo" => demo).increment(1);
    tracing::info!(demo, steps, "demo completed");
}

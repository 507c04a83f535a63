//! HTTP API for the design pattern showcase.
//!
//! Serves the pattern catalog and runs the state, chain of responsibility
//! and mediator demonstrations on request, with structured logging
//! (tracing) and Prometheus metrics.

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use state_machine::OrderStateMachine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared application state accessible from all handlers.
///
/// The order state machine holds only stateless handlers, so one registry
/// serves every request. All other engines are built fresh per request.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub machine: OrderStateMachine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            machine: OrderStateMachine::new(),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/patterns", get(routes::patterns::list))
        .route("/patterns/{slug}", get(routes::patterns::get))
        .route("/demos/state/order", post(routes::demos::state::order))
        .route(
            "/demos/state/traffic-light",
            get(routes::demos::state::traffic_light),
        )
        .route("/demos/chain/support", post(routes::demos::chain::support))
        .route("/demos/chain/expense", post(routes::demos::chain::expense))
        .route("/demos/mediator/chat", post(routes::demos::mediator::chat))
        .route(
            "/demos/mediator/air-traffic",
            post(routes::demos::mediator::air_traffic),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state from `config`.
pub fn create_default_state(config: Config) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}

//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use handler_chain::ChainError;
use mediator::MediatorError;
use state_machine::StateMachineError;
use thiserror::Error;

use crate::catalog::CatalogError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Bad request from the client.
    #[error("{0}")]
    BadRequest(String),
    /// State machine rejected the input.
    #[error(transparent)]
    StateMachine(#[from] StateMachineError),
    /// Chain request failed validation.
    #[error(transparent)]
    Chain(#[from] ChainError),
    /// Pattern catalog query could not be parsed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Mediator could not route a scripted step.
    #[error(transparent)]
    Mediator(MediatorError),
    /// Internal server error. The detail is logged, never returned.
    #[error("{0}")]
    Internal(String),
}

const INTERNAL_MESSAGE: &str = "internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::StateMachine(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Chain(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Catalog(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Mediator(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(msg) => internal(&msg),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// A dropped mediator is a server fault, every other mediator error is the
/// script's.
impl From<MediatorError> for ApiError {
    fn from(err: MediatorError) -> Self {
        match err {
            err @ MediatorError::MediatorUnavailable => ApiError::Internal(err.to_string()),
            other => ApiError::Mediator(other),
        }
    }
}

fn internal(detail: &str) -> (StatusCode, String) {
    tracing::error!(error = %detail, "internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_MESSAGE.to_string(),
    )
}

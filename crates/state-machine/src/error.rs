//! State machine error types.

use thiserror::Error;

/// Errors raised when a caller asks the machine for something it cannot map.
///
/// Both variants describe invalid input rather than engine faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateMachineError {
    /// The order's status label has no registered state handler.
    #[error("Unknown order state: '{status}'")]
    UnknownState { status: String },

    /// The requested action is not one of process, cancel or complete.
    #[error("Unknown order action: '{action}' (expected process, cancel or complete)")]
    UnknownAction { action: String },
}

/// Convenience type alias for state machine results.
pub type Result<T> = std::result::Result<T, StateMachineError>;

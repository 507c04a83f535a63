//! Mediator error types.

use thiserror::Error;

/// Errors raised for requests a mediator cannot route.
///
/// Runway contention is not an error; denials come back as
/// [`crate::TowerDecision`] values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediatorError {
    /// A participant with this name is already registered.
    #[error("Participant already registered: {name}")]
    DuplicateParticipant { name: String },

    /// No registered participant has this name.
    #[error("Unknown participant: {name}")]
    UnknownParticipant { name: String },

    /// The event tag is not recognized.
    #[error("Unknown event: '{event}' (expected typing or leave)")]
    UnknownEvent { event: String },

    /// Message text is empty.
    #[error("Message text must not be empty")]
    EmptyMessage,

    /// The participant outlived its mediator.
    #[error("Mediator is no longer available")]
    MediatorUnavailable,
}

/// Convenience type alias for mediator results.
pub type Result<T> = std::result::Result<T, MediatorError>;

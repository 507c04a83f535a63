//! Chain error types.

use thiserror::Error;

/// Errors raised while building a request for a chain.
///
/// A request that no handler accepts is not an error; see
/// [`crate::ChainOutcome::Unhandled`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// Ticket priority outside 1..=5.
    #[error("Invalid priority: {priority} (must be between 1 and 5)")]
    InvalidPriority { priority: u8 },

    /// Expense amount is zero or negative.
    #[error("Invalid amount: {amount} (must be greater than 0)")]
    InvalidAmount { amount: i64 },
}

/// Convenience type alias for chain results.
pub type Result<T> = std::result::Result<T, ChainError>;

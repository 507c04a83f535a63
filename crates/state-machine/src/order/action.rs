//! Order actions and their outcomes.

use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::error::StateMachineError;

/// An operation a caller can request on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Process,
    Cancel,
    Complete,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Process => "process",
            OrderAction::Cancel => "cancel",
            OrderAction::Complete => "complete",
        }
    }
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderAction {
    type Err = StateMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "process" => Ok(OrderAction::Process),
            "cancel" => Ok(OrderAction::Cancel),
            "complete" => Ok(OrderAction::Complete),
            _ => Err(StateMachineError::UnknownAction {
                action: s.to_string(),
            }),
        }
    }
}

/// What a state handler did in response to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// The handler moved the order to a new status.
    Transitioned(String),
    /// The action is legal but has no effect in this state.
    NoOp(String),
    /// The action is not permitted in this state.
    Refused(String),
}

impl Reaction {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Reaction::Transitioned(_) => OutcomeKind::Transitioned,
            Reaction::NoOp(_) => OutcomeKind::NoOp,
            Reaction::Refused(_) => OutcomeKind::Refused,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Reaction::Transitioned(m) | Reaction::NoOp(m) | Reaction::Refused(m) => m,
        }
    }
}

/// Classification of an [`ActionOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Transitioned,
    NoOp,
    Refused,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Transitioned => "transitioned",
            OutcomeKind::NoOp => "no_op",
            OutcomeKind::Refused => "refused",
        }
    }
}

/// The record of one action applied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub action: OrderAction,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub kind: OutcomeKind,
    pub message: String,
}

impl ActionOutcome {
    /// Returns true if the action changed the order's status.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }

    /// Renders the outcome as a single narration line.
    pub fn describe(&self) -> String {
        match self.kind {
            OutcomeKind::Transitioned => {
                format!("{}: {} -> {} ({})", self.action, self.from, self.to, self.message)
            }
            OutcomeKind::NoOp => format!("{}: no-op in {} ({})", self.action, self.from, self.message),
            OutcomeKind::Refused => {
                format!("{}: refused in {} ({})", self.action, self.from, self.message)
            }
        }
    }
}

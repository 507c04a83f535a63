//! Mediator engines.
//!
//! Participants never talk to each other directly. Each holds a weak
//! back-reference to its mediator and every interaction goes through it:
//! - [`ChatRoom`] routes public, private and notice traffic between users
//! - [`ControlTower`] arbitrates a fixed pool of runways between aircraft

pub mod air_traffic;
pub mod chat;
pub mod error;
mod lock;
pub mod scenario;

pub use air_traffic::{
    Aircraft, ControlTower, DecisionKind, Runway, TowerDecision, TowerRequest,
};
pub use chat::{ChatEvent, ChatRoom, ChatUser, InboxMessage, MessageKind};
pub use error::MediatorError;

/// A coordinator that reacts to events raised by its participants.
pub trait Mediator {
    type Event;
    type Outcome;

    /// Handles `event` raised by the participant named `sender`.
    fn notify(&self, sender: &str, event: Self::Event) -> error::Result<Self::Outcome>;
}

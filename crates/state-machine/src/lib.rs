//! State pattern engines.
//!
//! This crate provides two finite-state machines:
//! - An order workflow where each status is backed by a stateless
//!   [`OrderState`] handler looked up by name from a registry
//! - A cyclic traffic light modelled as a closed enum
//!
//! The [`scenario`] module drives both engines and produces
//! serializable [`common::DemoReport`]s.

pub mod error;
pub mod order;
pub mod scenario;
pub mod traffic_light;

pub use error::StateMachineError;
pub use order::{
    ActionOutcome, LineItem, Order, OrderAction, OrderContext, OrderState, OrderStateMachine,
    OrderStatus, OutcomeKind, Reaction,
};
pub use traffic_light::{LightColor, LightPhase, TrafficLight};

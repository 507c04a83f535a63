//! HTTP route handlers.

pub mod demos;
pub mod health;
pub mod metrics;
pub mod patterns;

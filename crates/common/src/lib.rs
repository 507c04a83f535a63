//! Shared types used by every pattern engine and the HTTP boundary.

pub mod activity;
pub mod id;
pub mod money;
pub mod report;

pub use activity::{ActivityLog, LogEntry};
pub use id::EntityId;
pub use money::Money;
pub use report::DemoReport;

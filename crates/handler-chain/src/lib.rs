//! Chain of responsibility engine.
//!
//! A [`Chain`] is an ordered list of [`Handler`]s built once and then
//! walked front to back for every request. The first handler that accepts
//! the request resolves it; if none does the chain reports
//! [`ChainOutcome::Unhandled`] rather than failing.
//!
//! Two chains are provided:
//! 1. Support ticket escalation by ticket kind and priority
//! 2. Expense approval by monetary threshold

pub mod chain;
pub mod error;
pub mod expense;
pub mod scenario;
pub mod support;

pub use chain::{Chain, ChainOutcome, Handler};
pub use error::ChainError;
pub use expense::{Approver, ExecutiveApprover, ExpenseRequest, expense_chain};
pub use support::{
    CriticalResponse, GeneralSupport, SupportTicket, TechnicalSupport, support_chain,
};

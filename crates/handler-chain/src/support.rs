//! Support ticket escalation chain.
//!
//! ```text
//! General (basic, p<=2) ──► Technical (technical, p<=3) ──► Critical (critical or p>=4)
//! ```
//!
//! The eligibility rules overlap: a `technical` ticket with priority 4 is
//! taken by Critical only because Technical declines it first. Order in the
//! chain is the only tie-break.

use serde::{Deserialize, Serialize};

use crate::chain::{Chain, Handler};
use crate::error::{ChainError, Result};

pub const CHAIN_NAME: &str = "support";

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

/// A support request. Passed along the chain unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Category tag, e.g. `basic`, `technical`, `critical`.
    pub kind: String,
    /// 1 (lowest) to 5 (highest).
    pub priority: u8,
    pub description: String,
}

impl SupportTicket {
    /// Creates a ticket, rejecting priorities outside 1..=5.
    pub fn new(
        kind: impl Into<String>,
        priority: u8,
        description: impl Into<String>,
    ) -> Result<Self> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(ChainError::InvalidPriority { priority });
        }

        Ok(Self {
            kind: kind.into(),
            priority,
            description: description.into(),
        })
    }

    fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }
}

/// Front-line support: low priority basic questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralSupport;

impl Handler<SupportTicket> for GeneralSupport {
    fn name(&self) -> &str {
        "General Support"
    }

    fn handle(&self, ticket: &SupportTicket) -> Option<String> {
        (ticket.is_kind("basic") && ticket.priority <= 2).then(|| {
            format!(
                "answered from the knowledge base: \"{}\"",
                ticket.description
            )
        })
    }
}

/// Engineers on rotation: technical issues up to priority 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalSupport;

impl Handler<SupportTicket> for TechnicalSupport {
    fn name(&self) -> &str {
        "Technical Support"
    }

    fn handle(&self, ticket: &SupportTicket) -> Option<String> {
        (ticket.is_kind("technical") && ticket.priority <= 3).then(|| {
            format!(
                "assigned to the on-call engineer: \"{}\"",
                ticket.description
            )
        })
    }
}

/// Incident response: anything critical or priority 4 and above.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalResponse;

impl Handler<SupportTicket> for CriticalResponse {
    fn name(&self) -> &str {
        "Critical Response"
    }

    fn handle(&self, ticket: &SupportTicket) -> Option<String> {
        (ticket.is_kind("critical") || ticket.priority >= 4).then(|| {
            format!(
                "incident opened at priority {}, escalation team paged: \"{}\"",
                ticket.priority, ticket.description
            )
        })
    }
}

/// Builds the three-level support chain.
pub fn support_chain() -> Chain<SupportTicket> {
    Chain::new(CHAIN_NAME)
        .then(GeneralSupport)
        .then(TechnicalSupport)
        .then(CriticalResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(kind: &str, priority: u8) -> SupportTicket {
        SupportTicket::new(kind, priority, "printer on fire").unwrap()
    }

    #[test]
    fn test_priority_bounds() {
        assert_eq!(
            SupportTicket::new("basic", 0, "x"),
            Err(ChainError::InvalidPriority { priority: 0 })
        );
        assert_eq!(
            SupportTicket::new("basic", 6, "x"),
            Err(ChainError::InvalidPriority { priority: 6 })
        );
        assert!(SupportTicket::new("basic", 5, "x").is_ok());
    }

    #[test]
    fn test_general_support_predicate() {
        assert!(GeneralSupport.handle(&ticket("basic", 2)).is_some());
        assert!(GeneralSupport.handle(&ticket("BASIC", 1)).is_some());
        assert!(GeneralSupport.handle(&ticket("basic", 3)).is_none());
        assert!(GeneralSupport.handle(&ticket("technical", 1)).is_none());
    }

    #[test]
    fn test_technical_support_predicate() {
        assert!(TechnicalSupport.handle(&ticket("technical", 3)).is_some());
        assert!(TechnicalSupport.handle(&ticket("technical", 4)).is_none());
        assert!(TechnicalSupport.handle(&ticket("critical", 1)).is_none());
    }

    #[test]
    fn test_critical_response_predicate() {
        assert!(CriticalResponse.handle(&ticket("critical", 1)).is_some());
        assert!(CriticalResponse.handle(&ticket("basic", 4)).is_some());
        assert!(CriticalResponse.handle(&ticket("basic", 3)).is_none());
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(
            support_chain().link_names(),
            vec!["General Support", "Technical Support", "Critical Response"]
        );
    }
}

//! Expense approval chain.
//!
//! Each approver signs off on amounts up to and including their limit.
//! The executive has no limit, so every valid request is resolved.

use common::Money;
use serde::{Deserialize, Serialize};

use crate::chain::{Chain, Handler};
use crate::error::{ChainError, Result};

pub const CHAIN_NAME: &str = "expense";

/// An expense awaiting approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub amount: Money,
    pub purpose: String,
}

impl ExpenseRequest {
    pub fn new(amount: Money, purpose: impl Into<String>) -> Result<Self> {
        if !amount.is_positive() {
            return Err(ChainError::InvalidAmount {
                amount: amount.cents(),
            });
        }

        Ok(Self {
            amount,
            purpose: purpose.into(),
        })
    }

    /// Shorthand for a whole-dollar request.
    pub fn dollars(dollars: i64, purpose: impl Into<String>) -> Result<Self> {
        Self::new(Money::from_dollars(dollars), purpose)
    }
}

/// An approver with a fixed signing limit.
#[derive(Debug, Clone)]
pub struct Approver {
    title: &'static str,
    limit: Money,
}

impl Approver {
    pub fn new(title: &'static str, limit: Money) -> Self {
        Self { title, limit }
    }

    pub fn limit(&self) -> Money {
        self.limit
    }
}

impl Handler<ExpenseRequest> for Approver {
    fn name(&self) -> &str {
        self.title
    }

    fn handle(&self, request: &ExpenseRequest) -> Option<String> {
        (request.amount <= self.limit).then(|| {
            format!(
                "{} approved {} for {} (limit {})",
                self.title, request.amount, request.purpose, self.limit
            )
        })
    }
}

/// Top of the chain. Approves anything; large amounts are flagged for
/// board review.
#[derive(Debug, Clone)]
pub struct ExecutiveApprover {
    board_review_above: Money,
}

impl ExecutiveApprover {
    pub fn new(board_review_above: Money) -> Self {
        Self { board_review_above }
    }
}

impl Handler<ExpenseRequest> for ExecutiveApprover {
    fn name(&self) -> &str {
        "Executive"
    }

    fn handle(&self, request: &ExpenseRequest) -> Option<String> {
        if request.amount > self.board_review_above {
            Some(format!(
                "Executive approved {} for {} pending board review",
                request.amount, request.purpose
            ))
        } else {
            Some(format!(
                "Executive approved {} for {}",
                request.amount, request.purpose
            ))
        }
    }
}

/// Builds the four-level approval chain: $500, $2,000, $10,000, unlimited.
pub fn expense_chain() -> Chain<ExpenseRequest> {
    Chain::new(CHAIN_NAME)
        .then(Approver::new("Team Lead", Money::from_dollars(500)))
        .then(Approver::new("Manager", Money::from_dollars(2_000)))
        .then(Approver::new("Director", Money::from_dollars(10_000)))
        .then(ExecutiveApprover::new(Money::from_dollars(50_000)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(
            ExpenseRequest::dollars(0, "nothing"),
            Err(ChainError::InvalidAmount { amount: 0 })
        );
        assert_eq!(
            ExpenseRequest::new(Money::from_cents(-100), "refund"),
            Err(ChainError::InvalidAmount { amount: -100 })
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        let lead = Approver::new("Team Lead", Money::from_dollars(500));
        assert!(lead.handle(&ExpenseRequest::dollars(500, "x").unwrap()).is_some());
        assert!(
            lead.handle(&ExpenseRequest::new(Money::from_cents(50_001), "x").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_executive_flags_board_review() {
        let exec = ExecutiveApprover::new(Money::from_dollars(50_000));
        let small = exec
            .handle(&ExpenseRequest::dollars(25_000, "servers").unwrap())
            .unwrap();
        let large = exec
            .handle(&ExpenseRequest::dollars(75_000, "office").unwrap())
            .unwrap();

        assert!(!small.contains("board review"));
        assert!(large.ends_with("pending board review"));
    }

    #[test]
    fn test_message_names_amount_and_purpose() {
        let outcome =
            expense_chain().handle(&ExpenseRequest::dollars(1_500, "conference").unwrap());
        assert_eq!(outcome.handler(), Some("Manager"));
        assert_eq!(
            outcome.message(),
            Some("Manager approved $1,500.00 for conference (limit $2,000.00)")
        );
    }
}

//! Integration tests for the support and expense chains.

use common::Money;
use handler_chain::{
    Chain, ChainError, ChainOutcome, ExpenseRequest, Handler, SupportTicket, expense_chain,
    support_chain,
};

mod support {
    use super::*;

    fn level_for(kind: &str, priority: u8) -> Option<usize> {
        let ticket = SupportTicket::new(kind, priority, "test").unwrap();
        support_chain().handle(&ticket).level()
    }

    #[test]
    fn basic_priority_one_resolves_at_first_handler() {
        assert_eq!(level_for("basic", 1), Some(1));
    }

    #[test]
    fn critical_always_resolves_at_third_handler() {
        for priority in 1..=5 {
            let ticket = SupportTicket::new("critical", priority, "outage").unwrap();
            let outcome = support_chain().handle(&ticket);
            assert_eq!(outcome.level(), Some(3), "priority {priority}");
            assert_eq!(
                outcome.passed(),
                ["General Support".to_string(), "Technical Support".to_string()]
            );
        }
    }

    #[test]
    fn technical_escalates_once_priority_exceeds_three() {
        assert_eq!(level_for("technical", 3), Some(2));
        assert_eq!(level_for("technical", 4), Some(3));
    }

    #[test]
    fn unmatched_ticket_is_unhandled_not_an_error() {
        let ticket = SupportTicket::new("billing", 2, "refund please").unwrap();
        let outcome = support_chain().handle(&ticket);
        assert_eq!(
            outcome,
            ChainOutcome::Unhandled {
                passed: vec![
                    "General Support".to_string(),
                    "Technical Support".to_string(),
                    "Critical Response".to_string(),
                ]
            }
        );
    }

    #[test]
    fn request_is_not_modified_by_the_chain() {
        let ticket = SupportTicket::new("technical", 2, "slow page").unwrap();
        let before = ticket.clone();
        support_chain().handle(&ticket);
        assert_eq!(ticket, before);
    }
}

mod expense {
    use super::*;

    #[test]
    fn amounts_resolve_at_expected_levels() {
        let chain = expense_chain();
        let levels: Vec<_> = [250, 1_500, 5_000, 25_000, 75_000]
            .into_iter()
            .map(|dollars| {
                let request = ExpenseRequest::dollars(dollars, "test").unwrap();
                chain.handle(&request).level()
            })
            .collect();

        assert_eq!(levels, vec![Some(1), Some(2), Some(3), Some(4), Some(4)]);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let chain = expense_chain();
        let at = |cents: i64| {
            chain
                .handle(&ExpenseRequest::new(Money::from_cents(cents), "edge").unwrap())
                .handler()
                .map(String::from)
        };

        assert_eq!(at(50_000).as_deref(), Some("Team Lead"));
        assert_eq!(at(50_001).as_deref(), Some("Manager"));
        assert_eq!(at(200_000).as_deref(), Some("Manager"));
        assert_eq!(at(1_000_000).as_deref(), Some("Director"));
        assert_eq!(at(1_000_001).as_deref(), Some("Executive"));
    }

    #[test]
    fn non_positive_amount_is_rejected_before_the_chain() {
        assert_eq!(
            ExpenseRequest::dollars(-5, "negative"),
            Err(ChainError::InvalidAmount { amount: -500 })
        );
    }
}

mod custom_chains {
    use super::*;

    struct Named(&'static str, fn(&str) -> bool);

    impl Handler<String> for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn handle(&self, request: &String) -> Option<String> {
            (self.1)(request).then(|| format!("{} handled {request}", self.0))
        }
    }

    #[test]
    fn link_order_is_the_tie_break() {
        let starts_with_a = |s: &str| s.starts_with('a');
        let short = |s: &str| s.len() < 5;

        let a_first = Chain::new("a-first")
            .then(Named("prefix", starts_with_a))
            .then(Named("length", short));
        let short_first = Chain::new("short-first")
            .then(Named("length", short))
            .then(Named("prefix", starts_with_a));

        let request = "abc".to_string();
        assert_eq!(a_first.handle(&request).handler(), Some("prefix"));
        assert_eq!(short_first.handle(&request).handler(), Some("length"));
    }
}

//! Demonstration runners for the two chains.

use common::DemoReport;
use serde::Serialize;

use crate::chain::{Chain, ChainOutcome};
use crate::error::Result;
use crate::expense::{ExpenseRequest, expense_chain};
use crate::support::{SupportTicket, support_chain};

pub const PATTERN: &str = "Chain of Responsibility";

/// A request paired with how the chain resolved it.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution<R> {
    pub request: R,
    pub outcome: ChainOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainDemoResult<R> {
    pub chain: Vec<String>,
    pub resolutions: Vec<Resolution<R>>,
    pub unhandled: usize,
}

/// Tickets used when the caller supplies none.
pub fn sample_tickets() -> Result<Vec<SupportTicket>> {
    Ok(vec![
        SupportTicket::new("basic", 1, "How do I reset my password?")?,
        SupportTicket::new("technical", 3, "API returns 502 intermittently")?,
        SupportTicket::new("critical", 2, "Checkout is down for all users")?,
        SupportTicket::new("basic", 3, "Feature request: dark mode")?,
        SupportTicket::new("technical", 5, "Database replica lagging by hours")?,
    ])
}

/// Expense amounts (whole dollars) used when the caller supplies none.
pub const SAMPLE_EXPENSES: [(i64, &str); 5] = [
    (250, "team lunch"),
    (1_500, "conference tickets"),
    (5_000, "new laptops"),
    (25_000, "server hardware"),
    (75_000, "office renovation"),
];

pub fn sample_expenses() -> Result<Vec<ExpenseRequest>> {
    SAMPLE_EXPENSES
        .iter()
        .map(|&(dollars, purpose)| ExpenseRequest::dollars(dollars, purpose))
        .collect()
}

fn run<R, F>(
    chain: &Chain<R>,
    requests: Vec<R>,
    scenario: &str,
    describe: F,
) -> DemoReport<ChainDemoResult<R>>
where
    F: Fn(&R) -> String,
{
    let mut steps = vec![format!("chain: {}", chain.link_names().join(" -> "))];
    let mut resolutions = Vec::with_capacity(requests.len());

    for request in requests {
        let outcome = chain.handle(&request);
        let line = match &outcome {
            ChainOutcome::Handled {
                level,
                handler,
                message,
                ..
            } => format!(
                "{} => level {level} ({handler}): {message}",
                describe(&request)
            ),
            ChainOutcome::Unhandled { .. } => {
                format!("{} => unhandled, no handler accepted it", describe(&request))
            }
        };
        steps.push(line);
        resolutions.push(Resolution { request, outcome });
    }

    let unhandled = resolutions
        .iter()
        .filter(|r| !r.outcome.is_handled())
        .count();
    let result = ChainDemoResult {
        chain: chain.link_names().into_iter().map(String::from).collect(),
        resolutions,
        unhandled,
    };
    DemoReport::new(PATTERN, scenario, result).with_steps(steps)
}

/// Routes each ticket through the support chain.
pub fn run_support_demo(
    tickets: Vec<SupportTicket>,
) -> Result<DemoReport<ChainDemoResult<SupportTicket>>> {
    let tickets = if tickets.is_empty() {
        sample_tickets()?
    } else {
        tickets
    };

    Ok(run(&support_chain(), tickets, "support ticket escalation", |t| {
        format!("[{} p{}] {}", t.kind, t.priority, t.description)
    }))
}

/// Routes each expense through the approval chain.
pub fn run_expense_demo(
    expenses: Vec<ExpenseRequest>,
) -> Result<DemoReport<ChainDemoResult<ExpenseRequest>>> {
    let expenses = if expenses.is_empty() {
        sample_expenses()?
    } else {
        expenses
    };

    Ok(run(&expense_chain(), expenses, "expense approval", |e| {
        format!("{} for {}", e.amount, e.purpose)
    }))
}

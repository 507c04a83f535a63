//! Serializable description of a finished demonstration.

use serde::Serialize;

/// Everything that happened during one demonstration run.
///
/// `steps` holds the human-readable narration in execution order and
/// `result` the structured final state of the engine.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport<T> {
    pub pattern: &'static str,
    pub scenario: String,
    pub steps: Vec<String>,
    pub result: T,
}

impl<T> DemoReport<T> {
    pub fn new(pattern: &'static str, scenario: impl Into<String>, result: T) -> Self {
        Self {
            pattern,
            scenario: scenario.into(),
            steps: Vec::new(),
            result,
        }
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Final {
        status: &'static str,
    }

    #[test]
    fn report_serializes_all_fields() {
        let report = DemoReport::new("State", "order workflow", Final { status: "Shipped" })
            .with_steps(vec!["process: Pending -> Processing".to_string()]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pattern"], "State");
        assert_eq!(json["scenario"], "order workflow");
        assert_eq!(json["steps"][0], "process: Pending -> Processing");
        assert_eq!(json["result"]["status"], "Shipped");
    }
}

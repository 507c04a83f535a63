//! Timestamped activity log shared by the mediator engines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped line in an [`ActivityLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    /// Renders the entry as `[HH:MM:SS] message`.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Append-only log of human-readable entries.
///
/// Timestamps are illustrative only; callers that compare logs should
/// compare [`ActivityLog::messages`] rather than rendered lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Utc::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the messages without timestamps.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns every entry rendered with its timestamp.
    pub fn rendered(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = ActivityLog::new();
        log.record("first");
        log.record(String::from("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn rendered_lines_carry_timestamp_prefix() {
        let mut log = ActivityLog::new();
        log.record("runway 09L assigned");

        let line = &log.rendered()[0];
        assert!(line.starts_with('['));
        assert!(line.ends_with("] runway 09L assigned"));
    }

    #[test]
    fn empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert!(log.rendered().is_empty());
    }
}

//! Activity log tracking.
//!
//! The log is append-only and kept newest-first. Entries are immutable once
//! recorded; the log itself only ever grows at the front.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Display format for the time column of an entry.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Traffic category an action belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Learning,
    Video,
    Game,
    Tool,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    High,
}

/// Whether the action was let through or stopped.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Allowed,
    Blocked,
}

/// A log entry before it has been stamped with an id and time.
///
/// # Example
///
/// ```rust
/// use classdesk::core::{Category, LogDraft, Outcome, Risk};
///
/// let draft = LogDraft::admin_action("Zhang Wei", "manual network cut");
/// assert_eq!(draft.category, Category::Tool);
/// assert_eq!(draft.risk, Risk::Low);
/// assert_eq!(draft.outcome, Outcome::Allowed);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LogDraft {
    pub subject: String,
    pub action: String,
    pub category: Category,
    pub risk: Risk,
    pub outcome: Outcome,
}

impl LogDraft {
    pub fn new(
        subject: impl Into<String>,
        action: impl Into<String>,
        category: Category,
        risk: Risk,
        outcome: Outcome,
    ) -> Self {
        Self {
            subject: subject.into(),
            action: action.into(),
            category,
            risk,
            outcome,
        }
    }

    /// Low-risk, allowed `tool` entry: the shape of every console action.
    pub fn admin_action(subject: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(subject, action, Category::Tool, Risk::Low, Outcome::Allowed)
    }
}

/// Immutable record of one action taken against a device or policy.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// Strictly increasing identifier derived from the creation time
    pub id: u64,
    pub subject: String,
    pub action: String,
    pub category: Category,
    /// Display time, formatted with [`TIME_FORMAT`]
    pub time: String,
    pub risk: Risk,
    pub outcome: Outcome,
}

impl LogEntry {
    fn stamp(draft: LogDraft, id: u64, at: &DateTime<FixedOffset>) -> Self {
        Self {
            id,
            subject: draft.subject,
            action: draft.action,
            category: draft.category,
            time: at.format(TIME_FORMAT).to_string(),
            risk: draft.risk,
            outcome: draft.outcome,
        }
    }
}

/// Newest-first, append-only collection of log entries.
///
/// # Example
///
/// ```rust
/// use chrono::DateTime;
/// use classdesk::core::{ActivityLog, LogDraft};
///
/// let at = DateTime::parse_from_rfc3339("2026-10-19T09:30:00+08:00").unwrap();
/// let mut log = ActivityLog::new();
///
/// log.record(LogDraft::admin_action("Zhang Wei", "manual network cut"), &at);
/// log.record(LogDraft::admin_action("Wang Fang", "network restored"), &at);
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().unwrap().subject, "Wang Fang");
/// assert_eq!(log.latest().unwrap().time, "09:30:00");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    last_id: u64,
}

impl ActivityLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from existing entries, given newest-first.
    ///
    /// Later ids continue above the largest id present.
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            entries: entries.into(),
            last_id,
        }
    }

    /// Stamp a draft and prepend it.
    ///
    /// The id is the millisecond timestamp of `at`, bumped past the previous
    /// id when the clock has not moved forward.
    pub fn record(&mut self, draft: LogDraft, at: &DateTime<FixedOffset>) -> &LogEntry {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id.saturating_add(1));
        self.last_id = id;

        self.entries.push_front(LogEntry::stamp(draft, id, at));
        &self.entries[0]
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Copy of all entries, newest-first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&LogEntry> {
        self.iter().filter(|e| e.category == category).collect()
    }

    pub fn by_outcome(&self, outcome: Outcome) -> Vec<&LogEntry> {
        self.iter().filter(|e| e.outcome == outcome).collect()
    }

    pub fn high_risk(&self) -> Vec<&LogEntry> {
        self.iter().filter(|e| e.risk == Risk::High).collect()
    }
}

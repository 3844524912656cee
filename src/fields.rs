//! Enumerations and classification metadata for tasks and projects.
//!
//! This module defines the closed value sets used to categorise work items
//! (status, priority, kind) and projects, the display tone each value maps to,
//! and lenient string parsing with explicit default fallbacks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Review,
    Testing,
    Done,
    Blocked,
    Cancelled,
}

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Work item kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Task,
    Bug,
    Feature,
    Epic,
    Story,
    Improvement,
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

/// Display tone for a classification value.
///
/// Tones are rendering hints, not semantics: the TUI maps each tone to a
/// terminal color, plain-text output ignores them. Every enum value maps to
/// exactly one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Accent,
    Warning,
    Success,
    Danger,
    Critical,
}

impl Status {
    /// Display tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            Status::Todo => Tone::Neutral,
            Status::InProgress => Tone::Info,
            Status::Review => Tone::Accent,
            Status::Testing => Tone::Warning,
            Status::Done => Tone::Success,
            Status::Blocked => Tone::Danger,
            Status::Cancelled => Tone::Neutral,
        }
    }

    /// True for statuses that end a task's lifecycle.
    /// Terminal tasks are never overdue, whatever their due date says.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done | Status::Cancelled)
    }

    /// All status values in workflow order.
    pub const ALL: [Status; 7] = [
        Status::Todo,
        Status::InProgress,
        Status::Review,
        Status::Testing,
        Status::Done,
        Status::Blocked,
        Status::Cancelled,
    ];
}

impl Priority {
    /// Display tone for this priority.
    pub fn tone(self) -> Tone {
        match self {
            Priority::Low => Tone::Success,
            Priority::Medium => Tone::Warning,
            Priority::High => Tone::Danger,
            Priority::Critical => Tone::Critical,
        }
    }

    /// All priority values from lowest to highest.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];
}

impl Kind {
    /// Display tone for this kind.
    pub fn tone(self) -> Tone {
        match self {
            Kind::Task => Tone::Neutral,
            Kind::Bug => Tone::Danger,
            Kind::Feature => Tone::Success,
            Kind::Epic => Tone::Accent,
            Kind::Story => Tone::Info,
            Kind::Improvement => Tone::Warning,
        }
    }

    /// All kind values.
    pub const ALL: [Kind; 6] = [
        Kind::Task,
        Kind::Bug,
        Kind::Feature,
        Kind::Epic,
        Kind::Story,
        Kind::Improvement,
    ];
}

/// Available sorting options for task lists.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Due,
    Priority,
    Id,
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "Todo",
        Status::InProgress => "In Progress",
        Status::Review => "Review",
        Status::Testing => "Testing",
        Status::Done => "Done",
        Status::Blocked => "Blocked",
        Status::Cancelled => "Cancelled",
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
        Priority::Critical => "Critical",
    }
}

/// Format a task kind for display.
pub fn format_kind(k: Kind) -> &'static str {
    match k {
        Kind::Task => "Task",
        Kind::Bug => "Bug",
        Kind::Feature => "Feature",
        Kind::Epic => "Epic",
        Kind::Story => "Story",
        Kind::Improvement => "Improvement",
    }
}

/// Format a project status for display.
pub fn format_project_status(s: ProjectStatus) -> &'static str {
    match s {
        ProjectStatus::Active => "Active",
        ProjectStatus::Completed => "Completed",
        ProjectStatus::OnHold => "On Hold",
        ProjectStatus::Cancelled => "Cancelled",
    }
}

/// Parse a status string. Unknown values fall back to Todo so that display
/// paths stay total over arbitrary input.
pub fn parse_status(s: &str) -> Status {
    match s.to_lowercase().as_str() {
        "todo" | "to-do" | "open" => Status::Todo,
        "in-progress" | "in_progress" | "inprogress" => Status::InProgress,
        "review" | "in-review" => Status::Review,
        "testing" => Status::Testing,
        "done" | "completed" => Status::Done,
        "blocked" => Status::Blocked,
        "cancelled" | "canceled" => Status::Cancelled,
        _ => Status::Todo,
    }
}

/// Parse a priority string. Unknown values fall back to Medium.
pub fn parse_priority(s: &str) -> Priority {
    match s.to_lowercase().as_str() {
        "low" => Priority::Low,
        "medium" | "med" => Priority::Medium,
        "high" => Priority::High,
        "critical" | "crit" => Priority::Critical,
        _ => Priority::Medium,
    }
}

/// Parse a kind string. Unknown values fall back to Task.
pub fn parse_kind(s: &str) -> Kind {
    match s.to_lowercase().as_str() {
        "task" => Kind::Task,
        "bug" => Kind::Bug,
        "feature" => Kind::Feature,
        "epic" => Kind::Epic,
        "story" => Kind::Story,
        "improvement" => Kind::Improvement,
        _ => Kind::Task,
    }
}

/// The filter sentinel meaning "no constraint on this field".
pub const FILTER_ALL: &str = "all";

/// Parse a status filter value. "all" or empty means no constraint.
pub fn parse_status_filter(s: &str) -> Option<Status> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(parse_status(s))
    }
}

/// Parse a priority filter value. "all" or empty means no constraint.
pub fn parse_priority_filter(s: &str) -> Option<Priority> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(parse_priority(s))
    }
}

/// Parse a kind filter value. "all" or empty means no constraint.
pub fn parse_kind_filter(s: &str) -> Option<Kind> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(parse_kind(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_fallback() {
        assert_eq!(parse_status("in-progress"), Status::InProgress);
        assert_eq!(parse_status("ARCHIVED"), Status::Todo);
        assert_eq!(parse_priority("crit"), Priority::Critical);
        assert_eq!(parse_priority("???"), Priority::Medium);
        assert_eq!(parse_kind("bug"), Kind::Bug);
        assert_eq!(parse_kind("widget"), Kind::Task);
    }

    #[test]
    fn test_filter_sentinel() {
        assert_eq!(parse_status_filter("all"), None);
        assert_eq!(parse_status_filter(""), None);
        assert_eq!(parse_status_filter("  ALL "), None);
        assert_eq!(parse_status_filter("done"), Some(Status::Done));
        assert_eq!(parse_priority_filter("all"), None);
        assert_eq!(parse_kind_filter("epic"), Some(Kind::Epic));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(Status::Done.is_terminal());
        assert!(Status::Cancelled.is_terminal());
        assert!(!Status::Blocked.is_terminal());
        assert!(!Status::Todo.is_terminal());
    }

    #[test]
    fn test_every_value_has_a_tone() {
        // Exhaustive matches make these total; spot-check the mapping.
        assert_eq!(Status::Done.tone(), Tone::Success);
        assert_eq!(Status::Blocked.tone(), Tone::Danger);
        assert_eq!(Status::Cancelled.tone(), Tone::Neutral);
        assert_eq!(Priority::Critical.tone(), Tone::Critical);
        assert_eq!(Kind::Bug.tone(), Tone::Danger);
    }
}

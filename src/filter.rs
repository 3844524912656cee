//! Task filtering and search composition.
//!
//! A `TaskFilter` combines a free-text search with equality filters over
//! status, priority, kind, and project. Active predicates compose with
//! logical AND; a `None` field (the "all" sentinel in string form) places no
//! constraint. Filtering is stable and never mutates the input collection.

use serde::Serialize;

use crate::fields::*;
use crate::task::Task;

/// A filter specification over a task collection.
///
/// `None` on an equality field means "all". An empty search string matches
/// everything; otherwise matching is a case-insensitive substring test
/// against title, description, and tags.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFilter {
    pub search: String,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub kind: Option<Kind>,
    pub project: Option<u64>,
}

impl TaskFilter {
    /// Build a filter from the dashboard's string form, where "all" (or an
    /// empty value) on an enum field is the no-constraint sentinel.
    pub fn parse(search: &str, status: &str, priority: &str, kind: &str, project: Option<u64>) -> Self {
        TaskFilter {
            search: search.trim().to_string(),
            status: parse_status_filter(status),
            priority: parse_priority_filter(priority),
            kind: parse_kind_filter(kind),
            project,
        }
    }

    /// True when no predicate is active, so every task matches.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status.is_none()
            && self.priority.is_none()
            && self.kind.is_none()
            && self.project.is_none()
    }

    /// True iff the task satisfies every active predicate.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(s) = self.status {
            if task.status != s {
                return false;
            }
        }
        if let Some(p) = self.priority {
            if task.priority != p {
                return false;
            }
        }
        if let Some(k) = self.kind {
            if task.kind != k {
                return false;
            }
        }
        if let Some(proj) = self.project {
            if task.project != Some(proj) {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !matches_text(task, &needle) {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving input order. Returns a new sequence of
    /// references; the input is untouched.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Case-insensitive substring match against title, description, or any tag.
/// `needle` must already be lowercased.
fn matches_text(task: &Task, needle: &str) -> bool {
    if task.title.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(desc) = &task.description {
        if desc.to_lowercase().contains(needle) {
            return true;
        }
    }
    task.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        let mut fix = Task::new(1, "Fix bug");
        fix.status = Status::Todo;
        fix.priority = Priority::High;
        fix.tags = vec!["x".into()];
        fix.project = Some(1);

        let mut ship = Task::new(2, "Ship it");
        ship.status = Status::Done;
        ship.priority = Priority::Low;
        ship.project = Some(2);

        let mut docs = Task::new(3, "Write docs");
        docs.description = Some("Document the FIX for the release".into());
        docs.status = Status::InProgress;
        docs.priority = Priority::Medium;
        docs.tags = vec!["docs".into(), "Release".into()];

        vec![fix, ship, docs]
    }

    #[test]
    fn test_search_over_title_description_and_tags() {
        let tasks = sample_tasks();
        let f = TaskFilter::parse("fix", "all", "all", "all", None);
        let out = f.apply(&tasks);
        // Title match on #1, description match on #3.
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

        let f = TaskFilter::parse("release", "all", "all", "all", None);
        let out = f.apply(&tasks);
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_search_composed_with_status() {
        let tasks = sample_tasks();
        let f = TaskFilter::parse("fix", "todo", "all", "all", None);
        let out = f.apply(&tasks);
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_all_sentinels_return_input_unchanged() {
        let tasks = sample_tasks();
        let f = TaskFilter::parse("", "all", "all", "all", None);
        assert!(f.is_unconstrained());
        let out = f.apply(&tasks);
        assert_eq!(out.len(), tasks.len());
        for (got, want) in out.iter().zip(tasks.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let tasks = sample_tasks();
        let f = TaskFilter {
            search: "i".into(),
            status: None,
            priority: None,
            kind: None,
            project: None,
        };
        let once: Vec<u64> = f.apply(&tasks).iter().map(|t| t.id).collect();
        let once_tasks: Vec<Task> = f.apply(&tasks).into_iter().cloned().collect();
        let twice: Vec<u64> = f.apply(&once_tasks).iter().map(|t| t.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_project_filter() {
        let tasks = sample_tasks();
        let f = TaskFilter {
            project: Some(2),
            ..Default::default()
        };
        let out = f.apply(&tasks);
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        // Task 3 has no project, so a project filter excludes it.
        let f = TaskFilter {
            project: Some(1),
            ..Default::default()
        };
        assert_eq!(f.apply(&tasks).iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_empty_collection() {
        let f = TaskFilter::parse("anything", "done", "high", "bug", Some(1));
        assert!(f.apply(&[]).is_empty());
    }
}

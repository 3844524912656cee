//! Aggregate statistics over task collections.
//!
//! Counts per status, priority, and kind, completion rate, and the combined
//! dashboard summary. Percentages are rounded independently, so a breakdown
//! need not sum to exactly 100.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::derive::{is_due_today, is_overdue};
use crate::fields::*;
use crate::project::Project;
use crate::task::Task;

/// Count tasks per status. Zero-count statuses are omitted.
pub fn count_by_status(tasks: &[Task]) -> BTreeMap<Status, usize> {
    let mut counts = BTreeMap::new();
    for t in tasks {
        *counts.entry(t.status).or_insert(0) += 1;
    }
    counts
}

/// Count tasks per priority. Zero-count priorities are omitted.
pub fn count_by_priority(tasks: &[Task]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for t in tasks {
        *counts.entry(t.priority).or_insert(0) += 1;
    }
    counts
}

/// Count tasks per kind. Zero-count kinds are omitted.
pub fn count_by_kind(tasks: &[Task]) -> BTreeMap<Kind, usize> {
    let mut counts = BTreeMap::new();
    for t in tasks {
        *counts.entry(t.kind).or_insert(0) += 1;
    }
    counts
}

/// Rounded percentage of `count` out of `total`, 0 when `total` is 0.
pub fn percentage_of(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u8
}

/// Rounded percentage of done tasks, 0 for an empty collection.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    let done = tasks.iter().filter(|t| t.status == Status::Done).count();
    percentage_of(done, tasks.len())
}

/// The summary block the dashboard header and `td stats` render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completion_rate: u8,
    pub open: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub by_status: BTreeMap<Status, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_kind: BTreeMap<Kind, usize>,
}

impl DashboardStats {
    /// Compute the summary for a task collection as of `today`.
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let open = tasks.iter().filter(|t| !t.status.is_terminal()).count();
        let overdue = tasks.iter().filter(|t| is_overdue(t, today)).count();
        let due_today = tasks.iter().filter(|t| is_due_today(t, today)).count();
        DashboardStats {
            total: tasks.len(),
            completion_rate: completion_rate(tasks),
            open,
            overdue,
            due_today,
            by_status: count_by_status(tasks),
            by_priority: count_by_priority(tasks),
            by_kind: count_by_kind(tasks),
        }
    }
}

/// One row of the projects view: a project with its task rollup.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    pub status: ProjectStatus,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub progress: u8,
}

/// Summarise every project against the task collection, preserving project
/// order.
pub fn project_summaries(projects: &[Project], tasks: &[Task]) -> Vec<ProjectSummary> {
    projects
        .iter()
        .map(|p| {
            let rollup = p.rollup(tasks);
            ProjectSummary {
                id: p.id,
                name: p.name.clone(),
                status: p.status,
                total_tasks: rollup.total_tasks,
                completed_tasks: rollup.completed_tasks,
                progress: p.effective_progress(tasks),
            }
        })
        .collect()
}

/// Distinct tags with usage counts, alphabetical. Tags are case-sensitive as
/// stored, so "Docs" and "docs" count separately.
pub fn tag_counts(tasks: &[Task]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for t in tasks {
        for tag in &t.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn with_status(id: u64, status: Status) -> Task {
        let mut t = Task::new(id, "t");
        t.status = status;
        t
    }

    #[test]
    fn test_count_by_status_and_completion_rate() {
        let mut tasks = vec![
            with_status(1, Status::Done),
            with_status(2, Status::Done),
            with_status(3, Status::Done),
            with_status(4, Status::Todo),
            with_status(5, Status::Blocked),
        ];
        tasks[3].priority = Priority::High;

        let by_status = count_by_status(&tasks);
        assert_eq!(by_status.get(&Status::Done), Some(&3));
        assert_eq!(by_status.get(&Status::Todo), Some(&1));
        assert_eq!(by_status.get(&Status::Blocked), Some(&1));
        // Zero-count variants are omitted.
        assert_eq!(by_status.get(&Status::Review), None);

        assert_eq!(completion_rate(&tasks), 60);
    }

    #[test]
    fn test_completion_rate_empty_and_bounds() {
        assert_eq!(completion_rate(&[]), 0);
        let all_done = vec![with_status(1, Status::Done)];
        assert_eq!(completion_rate(&all_done), 100);
        let none_done = vec![with_status(1, Status::Todo)];
        assert_eq!(completion_rate(&none_done), 0);
    }

    #[test]
    fn test_percentage_of_rounds() {
        assert_eq!(percentage_of(0, 0), 0);
        assert_eq!(percentage_of(1, 3), 33);
        assert_eq!(percentage_of(2, 3), 67);
        assert_eq!(percentage_of(1, 2), 50);
    }

    #[test]
    fn test_dashboard_stats() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut overdue = with_status(1, Status::InProgress);
        overdue.due = Some(today - Duration::days(2));
        let mut due_today = with_status(2, Status::Todo);
        due_today.due = Some(today);
        // Overdue date on a done task must not count as overdue.
        let mut done = with_status(3, Status::Done);
        done.due = Some(today - Duration::days(5));

        let tasks = vec![overdue, due_today, done];
        let stats = DashboardStats::compute(&tasks, today);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.completion_rate, 33);
    }

    #[test]
    fn test_tag_counts_case_sensitive() {
        let mut a = Task::new(1, "a");
        a.tags = vec!["docs".into(), "Docs".into()];
        let mut b = Task::new(2, "b");
        b.tags = vec!["docs".into()];
        let counts = tag_counts(&[a, b]);
        assert_eq!(counts.get("docs"), Some(&2));
        assert_eq!(counts.get("Docs"), Some(&1));
    }
}

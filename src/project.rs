//! Project data structure and per-project task rollups.
//!
//! A project groups tasks and carries its own lifecycle status and progress.
//! Task counts and completion percentages are derived from the live task
//! collection rather than stored, so they can never drift out of sync.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{ProjectStatus, Status};
use crate::stats::percentage_of;
use crate::task::Task;

/// A grouping of tasks with aggregate progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    pub completed: Option<NaiveDate>,
    /// Explicit progress percentage. Clamped to [0, 100] on read; when absent
    /// the task rollup percentage stands in.
    pub progress: Option<u8>,
    /// Team member ids. Weak references, lookup only.
    #[serde(default)]
    pub members: Vec<u64>,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}

/// Task counts for one project, derived from the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRollup {
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

impl Project {
    /// Count this project's tasks and how many of them are done.
    pub fn rollup(&self, tasks: &[Task]) -> ProjectRollup {
        let mine = tasks.iter().filter(|t| t.project == Some(self.id));
        let mut total = 0;
        let mut completed = 0;
        for t in mine {
            total += 1;
            if t.status == Status::Done {
                completed += 1;
            }
        }
        ProjectRollup {
            total_tasks: total,
            completed_tasks: completed,
        }
    }

    /// Progress percentage in [0, 100]: the explicit field when set, otherwise
    /// the completed-task percentage from the rollup.
    pub fn effective_progress(&self, tasks: &[Task]) -> u8 {
        match self.progress {
            Some(p) => p.min(100),
            None => {
                let r = self.rollup(tasks);
                percentage_of(r.completed_tasks, r.total_tasks)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Status;

    fn project(id: u64, progress: Option<u8>) -> Project {
        Project {
            id,
            name: format!("p{id}"),
            description: None,
            status: ProjectStatus::Active,
            start: None,
            due: None,
            completed: None,
            progress,
            members: Vec::new(),
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }

    fn task_in(id: u64, project: u64, status: Status) -> Task {
        let mut t = Task::new(id, "t");
        t.project = Some(project);
        t.status = status;
        t
    }

    #[test]
    fn test_rollup_counts_only_own_tasks() {
        let tasks = vec![
            task_in(1, 7, Status::Done),
            task_in(2, 7, Status::Todo),
            task_in(3, 8, Status::Done),
        ];
        let r = project(7, None).rollup(&tasks);
        assert_eq!(r.total_tasks, 2);
        assert_eq!(r.completed_tasks, 1);
    }

    #[test]
    fn test_explicit_progress_wins_and_is_clamped() {
        let tasks = vec![task_in(1, 7, Status::Done)];
        assert_eq!(project(7, Some(40)).effective_progress(&tasks), 40);
        assert_eq!(project(7, Some(250)).effective_progress(&tasks), 100);
        // No explicit value: falls back to rollup (1/1 done).
        assert_eq!(project(7, None).effective_progress(&tasks), 100);
    }

    #[test]
    fn test_progress_of_empty_project_is_zero() {
        let p = project(9, None);
        assert_eq!(p.effective_progress(&[]), 0);
    }
}

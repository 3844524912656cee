//! Seed data for the session store.
//!
//! The dashboard has no backend; every run starts from this fixture set.
//! Dates are anchored to the `today` passed in so the overdue and due-today
//! views always have something to show.

use chrono::{Duration, NaiveDate};

use crate::fields::*;
use crate::project::Project;
use crate::store::Store;
use crate::task::{Member, Task};

fn project(id: u64, name: &str, status: ProjectStatus, members: &[u64]) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: None,
        status,
        start: None,
        due: None,
        completed: None,
        progress: None,
        members: members.to_vec(),
        created_at_utc: 0,
        updated_at_utc: 0,
    }
}

struct TaskSeed {
    title: &'static str,
    description: Option<&'static str>,
    status: Status,
    priority: Priority,
    kind: Kind,
    project: Option<u64>,
    assignee: Option<u64>,
    due_offset: Option<i64>,
    tags: &'static [&'static str],
    estimated_hours: Option<f32>,
    parent: Option<u64>,
}

impl TaskSeed {
    fn build(self, id: u64, today: NaiveDate) -> Task {
        let mut t = Task::new(id, self.title);
        t.description = self.description.map(str::to_string);
        t.status = self.status;
        t.priority = self.priority;
        t.kind = self.kind;
        t.project = self.project;
        t.assignee = self.assignee;
        t.reporter = Some(1);
        t.due = self.due_offset.map(|d| today + Duration::days(d));
        t.tags = self.tags.iter().map(|s| s.to_string()).collect();
        t.estimated_hours = self.estimated_hours;
        t.parent = self.parent;
        if self.status == Status::Done {
            t.completed = Some(today - Duration::days(1));
            t.actual_hours = self.estimated_hours;
        }
        t
    }
}

/// Build the seeded store with dates anchored to `today`.
pub fn seed(today: NaiveDate) -> Store {
    let members = vec![
        Member { id: 1, name: "Ada Fields".into(), role: Some("Lead".into()) },
        Member { id: 2, name: "Marco Reyes".into(), role: Some("Backend".into()) },
        Member { id: 3, name: "Yuki Tanaka".into(), role: Some("Frontend".into()) },
    ];

    let projects = vec![
        project(1, "Checkout Revamp", ProjectStatus::Active, &[1, 2, 3]),
        project(2, "Mobile App", ProjectStatus::Active, &[2, 3]),
        project(3, "Legacy Migration", ProjectStatus::OnHold, &[1]),
    ];

    let seeds = [
        TaskSeed {
            title: "Redesign payment flow",
            description: Some("Replace the three-step checkout with a single page"),
            status: Status::InProgress,
            priority: Priority::High,
            kind: Kind::Epic,
            project: Some(1),
            assignee: Some(1),
            due_offset: Some(14),
            tags: &["checkout", "ux"],
            estimated_hours: Some(60.0),
            parent: None,
        },
        TaskSeed {
            title: "Fix card validation rejecting Amex",
            description: Some("Luhn check uses the wrong length table"),
            status: Status::InProgress,
            priority: Priority::Critical,
            kind: Kind::Bug,
            project: Some(1),
            assignee: Some(2),
            due_offset: Some(-2),
            tags: &["checkout", "payments"],
            estimated_hours: Some(4.0),
            parent: Some(1),
        },
        TaskSeed {
            title: "Add express checkout button",
            description: None,
            status: Status::Review,
            priority: Priority::Medium,
            kind: Kind::Feature,
            project: Some(1),
            assignee: Some(3),
            due_offset: Some(0),
            tags: &["checkout"],
            estimated_hours: Some(8.0),
            parent: Some(1),
        },
        TaskSeed {
            title: "Write checkout analytics events",
            description: Some("Funnel events for each checkout step"),
            status: Status::Done,
            priority: Priority::Low,
            kind: Kind::Task,
            project: Some(1),
            assignee: Some(2),
            due_offset: Some(-5),
            tags: &["analytics"],
            estimated_hours: Some(6.0),
            parent: Some(1),
        },
        TaskSeed {
            title: "Push notification opt-in screen",
            description: None,
            status: Status::Todo,
            priority: Priority::Medium,
            kind: Kind::Story,
            project: Some(2),
            assignee: Some(3),
            due_offset: Some(3),
            tags: &["mobile", "onboarding"],
            estimated_hours: Some(12.0),
            parent: None,
        },
        TaskSeed {
            title: "Crash on rotate in settings",
            description: Some("State not retained across configuration change"),
            status: Status::Testing,
            priority: Priority::High,
            kind: Kind::Bug,
            project: Some(2),
            assignee: Some(2),
            due_offset: Some(0),
            tags: &["mobile", "crash"],
            estimated_hours: Some(3.0),
            parent: None,
        },
        TaskSeed {
            title: "Offline mode spike",
            description: None,
            status: Status::Blocked,
            priority: Priority::Low,
            kind: Kind::Improvement,
            project: Some(2),
            assignee: None,
            due_offset: Some(21),
            tags: &["mobile", "research"],
            estimated_hours: None,
            parent: None,
        },
        TaskSeed {
            title: "Inventory export to new schema",
            description: Some("Nightly batch from the legacy warehouse tables"),
            status: Status::Todo,
            priority: Priority::High,
            kind: Kind::Task,
            project: Some(3),
            assignee: Some(1),
            due_offset: Some(-1),
            tags: &["migration", "batch"],
            estimated_hours: Some(16.0),
            parent: None,
        },
        TaskSeed {
            title: "Decommission FTP ingest",
            description: None,
            status: Status::Cancelled,
            priority: Priority::Low,
            kind: Kind::Task,
            project: Some(3),
            assignee: None,
            due_offset: Some(-10),
            tags: &["migration"],
            estimated_hours: None,
            parent: None,
        },
        TaskSeed {
            title: "Dashboard keyboard shortcuts",
            description: Some("Navigation without the mouse"),
            status: Status::Todo,
            priority: Priority::Low,
            kind: Kind::Improvement,
            project: None,
            assignee: Some(3),
            due_offset: None,
            tags: &["ux"],
            estimated_hours: Some(5.0),
            parent: None,
        },
    ];

    let mut tasks = Vec::with_capacity(seeds.len());
    for (i, seed) in seeds.into_iter().enumerate() {
        tasks.push(seed.build(i as u64 + 1, today));
    }

    Store {
        tasks,
        projects,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{is_due_today, is_overdue};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn test_seed_populates_every_view() {
        let store = seed(today());
        assert!(!store.tasks.is_empty());
        assert!(!store.projects.is_empty());
        // At least one overdue and one due-today task so those views render.
        assert!(store.tasks.iter().any(|t| is_overdue(t, today())));
        assert!(store.tasks.iter().any(|t| is_due_today(t, today())));
    }

    #[test]
    fn test_seed_ids_are_unique_and_references_resolve() {
        let store = seed(today());
        let mut ids: Vec<u64> = store.tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.tasks.len());

        for t in &store.tasks {
            if let Some(p) = t.project {
                assert!(store.project(p).is_some(), "dangling project on task {}", t.id);
            }
            if let Some(a) = t.assignee {
                assert!(store.member(a).is_some(), "dangling assignee on task {}", t.id);
            }
            if let Some(parent) = t.parent {
                assert!(store.task(parent).is_some(), "dangling parent on task {}", t.id);
            }
        }
    }

    #[test]
    fn test_overdue_terminal_seeds_stay_clean() {
        // The cancelled migration task has a past due date but must not be
        // counted as overdue.
        let store = seed(today());
        for t in store.tasks.iter().filter(|t| t.status.is_terminal()) {
            assert!(!is_overdue(t, today()));
        }
    }
}

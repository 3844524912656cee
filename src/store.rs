//! Session-local in-memory store.
//!
//! Holds the task, project, and member collections for the lifetime of the
//! process. There is no persistence: the store is seeded from fixtures at
//! startup and discarded on exit, so anything added lives only for the
//! session.

use crate::fields::format_kind;
use crate::project::Project;
use crate::task::{Member, Task};

/// In-memory collections backing the dashboard.
#[derive(Debug, Default)]
pub struct Store {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub members: Vec<Member>,
}

impl Store {
    /// Next task id: one greater than the current maximum, 1 when empty.
    pub fn next_task_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a task by id.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a project by id.
    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Get a member by id.
    pub fn member(&self, id: u64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Project name for display; "-" when the task has no project or the
    /// reference dangles.
    pub fn project_name(&self, id: Option<u64>) -> &str {
        id.and_then(|id| self.project(id))
            .map(|p| p.name.as_str())
            .unwrap_or("-")
    }

    /// Member name for display; "-" when absent or dangling.
    pub fn member_name(&self, id: Option<u64>) -> &str {
        id.and_then(|id| self.member(id))
            .map(|m| m.name.as_str())
            .unwrap_or("-")
    }

    /// Resolve a project given by name or id to its id.
    pub fn resolve_project(&self, identifier: &str) -> Result<u64, String> {
        if let Ok(id) = identifier.parse::<u64>() {
            if self.project(id).is_some() {
                return Ok(id);
            }
            return Err(format!("Project with id {id} not found"));
        }
        self.projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(identifier))
            .map(|p| p.id)
            .ok_or_else(|| format!("No project named '{identifier}'"))
    }

    /// Resolve a task given by id or exact title (case-insensitive) to its id.
    /// Ambiguous titles are an error listing the candidates.
    pub fn resolve_task(&self, identifier: &str) -> Result<u64, String> {
        if let Ok(id) = identifier.parse::<u64>() {
            if self.task(id).is_some() {
                return Ok(id);
            }
            return Err(format!("Task with id {id} not found"));
        }

        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.title.eq_ignore_ascii_case(identifier))
            .collect();

        match matches.len() {
            0 => Err(format!("No task found with title '{identifier}'")),
            1 => Ok(matches[0].id),
            _ => {
                let mut msg = format!("Multiple tasks titled '{identifier}':\n");
                for t in matches {
                    msg.push_str(&format!("  id {}: {} ({})\n", t.id, t.title, format_kind(t.kind)));
                }
                msg.push_str("Use the id instead.");
                Err(msg)
            }
        }
    }

    /// Insert a task and return its id.
    pub fn add_task(&mut self, task: Task) -> u64 {
        let id = task.id;
        self.tasks.push(task);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_max_plus_one() {
        let mut store = Store::default();
        assert_eq!(store.next_task_id(), 1);
        store.add_task(Task::new(4, "a"));
        store.add_task(Task::new(2, "b"));
        assert_eq!(store.next_task_id(), 5);
    }

    #[test]
    fn test_resolve_task_by_id_and_title() {
        let mut store = Store::default();
        store.add_task(Task::new(1, "Fix login"));
        store.add_task(Task::new(2, "Write docs"));

        assert_eq!(store.resolve_task("2"), Ok(2));
        assert_eq!(store.resolve_task("fix login"), Ok(1));
        assert!(store.resolve_task("99").is_err());
        assert!(store.resolve_task("nope").is_err());
    }

    #[test]
    fn test_resolve_task_ambiguous_title() {
        let mut store = Store::default();
        store.add_task(Task::new(1, "Dup"));
        store.add_task(Task::new(2, "dup"));
        assert!(store.resolve_task("dup").is_err());
    }

    #[test]
    fn test_dangling_references_render_as_unknown() {
        let store = Store::default();
        assert_eq!(store.project_name(Some(42)), "-");
        assert_eq!(store.member_name(None), "-");
    }
}

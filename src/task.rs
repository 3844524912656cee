//! Task data structure.
//!
//! This module defines the core `Task` struct representing a single work item
//! with its classification, scheduling, and reference metadata. Display facts
//! (overdue, due-today, effective progress) are derived on demand in the
//! `derive` module and never stored on the record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A work item with classification and scheduling metadata.
///
/// Assignee, reporter, project, and parent are weak references by id: they are
/// lookup keys into the session store, and a dangling id simply renders as
/// unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub kind: Kind,
    pub estimated_hours: Option<f32>,
    pub actual_hours: Option<f32>,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    pub completed: Option<NaiveDate>,
    pub assignee: Option<u64>,
    pub reporter: Option<u64>,
    pub project: Option<u64>,
    pub parent: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Explicit progress percentage. When absent, progress is estimated from
    /// status; when present it wins over the estimate.
    pub progress: Option<u8>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
    pub created_at_utc: i64,
    pub updated_at_utc: i64,
}

impl Task {
    /// Create a task with the given id and title; everything else defaults
    /// to an unscheduled, untagged Todo of medium priority.
    pub fn new(id: u64, title: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: None,
            status: Status::Todo,
            priority: Priority::Medium,
            kind: Kind::Task,
            estimated_hours: None,
            actual_hours: None,
            start: None,
            due: None,
            completed: None,
            assignee: None,
            reporter: None,
            project: None,
            parent: None,
            tags: Vec::new(),
            progress: None,
            custom_fields: BTreeMap::new(),
            created_at_utc: 0,
            updated_at_utc: 0,
        }
    }
}

/// A team member referenced by tasks and projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub role: Option<String>,
}

//! Request and response bodies for the task API.
//!
//! Payloads are mapped to domain types by hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{Task, TaskDetails};

/// External representation of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due instant.
    pub expire: DateTime<Utc>,
    /// Completion percentage.
    pub complete_percent: f64,
    /// Whether the task is done.
    pub is_done: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            expire: task.expire(),
            complete_percent: task.complete_percent().value(),
            is_done: task.is_done(),
        }
    }
}

/// Body of create and full-field update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due instant; offsets are normalised to UTC.
    pub expire: DateTime<Utc>,
}

impl From<TaskPayload> for TaskDetails {
    fn from(payload: TaskPayload) -> Self {
        Self::new(payload.title, payload.description, payload.expire)
    }
}

/// Body of completion percentage requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentCompletePayload {
    /// Requested completion percentage.
    #[serde(alias = "percentComplete")]
    pub complete_percent: f64,
}

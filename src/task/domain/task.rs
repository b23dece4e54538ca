//! Task aggregate root and related lifecycle types.

use super::{CompletePercent, Completion, TaskId};
use chrono::{DateTime, Utc};

/// User-editable fields of a task.
///
/// Used both for creation and for full-field updates. Length bounds are
/// checked by [`crate::task::validation`] before the details reach a
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Short task title.
    pub title: String,
    /// Longer task description.
    pub description: String,
    /// Due instant.
    pub expire: DateTime<Utc>,
}

impl TaskDetails {
    /// Creates a details payload.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        expire: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            expire,
        }
    }
}

/// Task that has not yet been assigned an identifier by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    details: TaskDetails,
    completion: Completion,
}

impl NewTask {
    /// Prepares a task with no progress recorded.
    #[must_use]
    pub const fn from_details(details: TaskDetails) -> Self {
        Self {
            details,
            completion: Completion::NOT_STARTED,
        }
    }

    /// Returns the task details.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the initial completion state.
    #[must_use]
    pub const fn completion(&self) -> Completion {
        self.completion
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            details: self.details,
            completion: self.completion,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    completion: Completion,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted due instant.
    pub expire: DateTime<Utc>,
    /// Persisted completion percentage.
    pub complete_percent: CompletePercent,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    ///
    /// The done flag is re-derived from the percentage rather than trusted
    /// from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: TaskDetails {
                title: data.title,
                description: data.description,
                expire: data.expire,
            },
            completion: Completion::from_percent(data.complete_percent),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the editable task fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.details.description
    }

    /// Returns the due instant.
    #[must_use]
    pub const fn expire(&self) -> DateTime<Utc> {
        self.details.expire
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn completion(&self) -> Completion {
        self.completion
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn complete_percent(&self) -> CompletePercent {
        self.completion.percent()
    }

    /// Returns `true` when the task is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.completion.is_done()
    }

    /// Overwrites title, description, and due instant.
    ///
    /// Completion state is left untouched.
    pub fn revise(&mut self, details: TaskDetails) {
        self.details = details;
    }

    /// Records progress and re-derives the done flag.
    pub fn set_complete_percent(&mut self, percent: CompletePercent) {
        self.completion = Completion::from_percent(percent);
    }
}

//! Service layer for the task lifecycle.

use crate::task::{
    domain::{CompletePercent, NewTask, Task, TaskDetails, TaskId, Window},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{ValidationErrors, validate_complete_percent},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The referenced task does not exist.
    #[error("Task with ID = {0} was not found.")]
    NotFound(TaskId),
    /// A payload field violated its constraints.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Owns the completion state transitions and the due-window filtering.
/// Title and description constraints are checked by the caller before a
/// payload reaches [`TaskLifecycleService::create`] or
/// [`TaskLifecycleService::update`].
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every stored task in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn get_by_id(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        match self.repository.find_by_id(id).await? {
            Some(task) => Ok(task),
            None => {
                tracing::warn!(task_id = %id, "task not found");
                Err(TaskLifecycleError::NotFound(id))
            }
        }
    }

    /// Returns the incomplete tasks due within `window`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_incoming(&self, window: Window) -> TaskLifecycleResult<Vec<Task>> {
        let bounds = window.bounds(&self.clock.local());
        let mut tasks: Vec<Task> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|task| !task.is_done() && bounds.contains(task.expire()))
            .collect();
        tasks.sort_by_key(Task::expire);

        tracing::debug!(
            window = %window,
            after = %bounds.after(),
            until = %bounds.until(),
            count = tasks.len(),
            "listed incoming tasks"
        );
        Ok(tasks)
    }

    /// Creates a task with no progress recorded and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store rejects
    /// the write.
    pub async fn create(&self, details: TaskDetails) -> TaskLifecycleResult<TaskId> {
        let id = self
            .repository
            .create(&NewTask::from_details(details))
            .await?;
        tracing::info!(task_id = %id, "created task");
        Ok(id)
    }

    /// Overwrites title, description, and due instant of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn update(&self, id: TaskId, details: TaskDetails) -> TaskLifecycleResult<()> {
        let mut task = self.get_by_id(id).await?;
        task.revise(details);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %id, "updated task");
        Ok(())
    }

    /// Records the completion percentage of a task and re-derives its done
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when `percent` lies outside
    /// `[0, 100]`, leaving the task unchanged, or
    /// [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn set_percent_complete(&self, id: TaskId, percent: f64) -> TaskLifecycleResult<()> {
        let validated = validate_complete_percent(percent).map_err(ValidationErrors::single)?;
        let mut task = self.get_by_id(id).await?;
        task.set_complete_percent(validated);
        self.repository.update(&task).await?;
        tracing::info!(
            task_id = %id,
            complete_percent = %validated,
            is_done = task.is_done(),
            "set task completion"
        );
        Ok(())
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.get_by_id(id).await?;
        self.repository.delete(task.id()).await?;
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Marks a task as done by setting its completion to one hundred
    /// percent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn mark_done(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.set_percent_complete(id, CompletePercent::MAX_VALUE)
            .await
    }
}

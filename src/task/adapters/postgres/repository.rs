//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::task::{
    domain::{CompletePercent, NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_TODOS_TABLE: &str = concat!(
    "CREATE TABLE IF NOT EXISTS todos (",
    "id BIGSERIAL PRIMARY KEY, ",
    "title VARCHAR(60) NOT NULL, ",
    "description VARCHAR(200) NOT NULL, ",
    "expire TIMESTAMPTZ NOT NULL, ",
    "complete_percent DOUBLE PRECISION NOT NULL DEFAULT 0, ",
    "is_done BOOLEAN NOT NULL DEFAULT FALSE)",
);

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot establish its initial
/// connections.
pub fn connect(database_url: &str) -> Result<TaskPgPool, PoolError> {
    Pool::builder().build(ConnectionManager::<PgConnection>::new(database_url))
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table when it does not yet exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(CREATE_TODOS_TABLE)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let id = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(todos::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(TaskId::new(id))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn is_empty(&self) -> TaskRepositoryResult<bool> {
        self.run_blocking(|connection| {
            let any = todos::table
                .select(todos::id)
                .first::<i64>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(any.is_none())
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTodoRow {
    let details = task.details();
    let completion = task.completion();
    NewTodoRow {
        title: details.title.clone(),
        description: details.description.clone(),
        expire: details.expire,
        complete_percent: completion.percent().value(),
        is_done: completion.is_done(),
    }
}

fn to_changeset(task: &Task) -> TodoChangeset {
    TodoChangeset {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        expire: task.expire(),
        complete_percent: task.complete_percent().value(),
        is_done: task.is_done(),
    }
}

fn row_to_task(row: TodoRow) -> TaskRepositoryResult<Task> {
    let TodoRow {
        id,
        title,
        description,
        expire,
        complete_percent,
        is_done,
    } = row;

    let complete_percent =
        CompletePercent::new(complete_percent).map_err(TaskRepositoryError::persistence)?;

    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        expire,
        complete_percent,
    });
    if task.is_done() != is_done {
        tracing::warn!(
            task_id = %task.id(),
            stored = is_done,
            derived = task.is_done(),
            "stored done flag disagrees with completion percent"
        );
    }
    Ok(task)
}

//! Demo data seeding for empty stores.

use crate::task::{
    domain::{NewTask, TaskDetails, local_to_utc},
    ports::{TaskRepository, TaskRepositoryResult},
};
use chrono::{DateTime, Days, NaiveTime, TimeZone};
use mockable::Clock;
use std::sync::Arc;

const SAMPLE_ORDINALS: [&str; 11] = [
    "", "First ", "Second ", "Third ", "Fourth ", "Fifth ", "Sixth ", "Seventh ", "Eighth ",
    "Ninth ", "Tenth ",
];

/// Populates an empty store with a demo data set.
pub struct TaskSeeder<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskSeeder<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a seeder over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Inserts the demo tasks when the store is empty.
    ///
    /// Returns the number of tasks inserted, which is zero when the store
    /// already held data.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the emptiness check or an insert
    /// fails.
    pub async fn seed_if_empty(&self) -> TaskRepositoryResult<usize> {
        if !self.repository.is_empty().await? {
            tracing::debug!("store already populated, skipping seed");
            return Ok(0);
        }

        let samples = sample_tasks(&self.clock.local());
        let count = samples.len();
        for sample in samples {
            self.repository.create(&sample).await?;
        }
        tracing::info!(count, "seeded demo tasks");
        Ok(count)
    }
}

/// Builds the demo tasks, due at local midnight today and on each of the
/// following ten days.
#[must_use]
pub fn sample_tasks<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<NewTask> {
    let today = now.date_naive();
    let timezone = now.timezone();

    SAMPLE_ORDINALS
        .iter()
        .zip(0_u64..)
        .filter_map(|(ordinal, days_ahead)| {
            let midnight = today
                .checked_add_days(Days::new(days_ahead))?
                .and_time(NaiveTime::MIN);
            let expire = local_to_utc(&timezone, midnight);
            Some(NewTask::from_details(TaskDetails::new(
                format!("{ordinal}ToDo title"),
                format!("{ordinal}ToDo description"),
                expire,
            )))
        })
        .collect()
}

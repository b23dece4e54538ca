//! Application services for task lifecycle orchestration.

mod lifecycle;
mod seed;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use seed::{TaskSeeder, sample_tasks};

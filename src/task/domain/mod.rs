//! Domain model for task lifecycle management.
//!
//! The task domain models the to-do record, its derived completion state,
//! and the named due-date windows, keeping all infrastructure concerns
//! outside of the domain boundary.

mod completion;
mod error;
mod ids;
mod task;
mod window;

pub use completion::{CompletePercent, Completion};
pub use error::{ParseWindowError, TaskDomainError};
pub use ids::TaskId;
pub use task::{NewTask, PersistedTaskData, Task, TaskDetails};
pub use window::{Window, WindowBounds, days_until_sunday};
pub(crate) use window::local_to_utc;

//! Clock adapters.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
///
/// Window boundaries depend on "now", so tests and reproducible demos run
/// the lifecycle service against a frozen clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.instant.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

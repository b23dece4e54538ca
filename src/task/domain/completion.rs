//! Completion percentage and the derived done flag.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress indicator bounded to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CompletePercent(f64);

impl CompletePercent {
    /// Lowest accepted percentage.
    pub const MIN_VALUE: f64 = 0.0;

    /// Percentage at which a task counts as done.
    pub const MAX_VALUE: f64 = 100.0;

    /// No progress.
    pub const ZERO: Self = Self(Self::MIN_VALUE);

    /// Fully complete.
    pub const FULL: Self = Self(Self::MAX_VALUE);

    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PercentOutOfRange`] when the value is
    /// below zero, above one hundred, or `NaN`.
    pub fn new(value: f64) -> Result<Self, TaskDomainError> {
        if (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TaskDomainError::PercentOutOfRange(value))
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` when the percentage equals one hundred.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 == Self::MAX_VALUE
    }
}

impl TryFrom<f64> for CompletePercent {
    type Error = TaskDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for CompletePercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CompletePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion state of a task.
///
/// The done flag is a cache of `percent == 100`. It can only be produced by
/// [`Completion::from_percent`], so the pair is always written together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    percent: CompletePercent,
    is_done: bool,
}

impl Completion {
    /// Completion state of a freshly created task.
    pub const NOT_STARTED: Self = Self {
        percent: CompletePercent::ZERO,
        is_done: false,
    };

    /// Derives the completion state for the given percentage.
    #[must_use]
    pub fn from_percent(percent: CompletePercent) -> Self {
        Self {
            percent,
            is_done: percent.is_full(),
        }
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn percent(self) -> CompletePercent {
        self.percent
    }

    /// Returns `true` when the task is done.
    #[must_use]
    pub const fn is_done(self) -> bool {
        self.is_done
    }
}

impl Default for Completion {
    fn default() -> Self {
        Self::NOT_STARTED
    }
}

impl From<CompletePercent> for Completion {
    fn from(percent: CompletePercent) -> Self {
        Self::from_percent(percent)
    }
}

impl From<Completion> for CompletePercent {
    fn from(completion: Completion) -> Self {
        completion.percent
    }
}

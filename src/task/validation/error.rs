//! Field-level violation types.

use std::fmt;
use thiserror::Error;

/// Payload field a violation is tagged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskField {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Completion percentage.
    CompletePercent,
}

impl TaskField {
    /// Returns the field name as it appears in request payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::CompletePercent => "completePercent",
        }
    }

    /// Returns the human-readable field label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::CompletePercent => "Complete Percent",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single constraint violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    field: TaskField,
    message: String,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    #[must_use]
    pub fn new(field: TaskField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the violated field.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the violation message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Non-empty set of violations collected from one payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("One or more validation errors occurred: {}", format_violations(.0))]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Collects violations, returning `None` when there are none.
    #[must_use]
    pub fn from_violations(violations: impl IntoIterator<Item = FieldViolation>) -> Option<Self> {
        let collected: Vec<FieldViolation> = violations.into_iter().collect();
        if collected.is_empty() {
            None
        } else {
            Some(Self(collected))
        }
    }

    /// Wraps a single violation.
    #[must_use]
    pub fn single(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }

    /// Returns the individual violations.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Returns `true` when any violation is tagged to `field`.
    #[must_use]
    pub fn has_field(&self, field: TaskField) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

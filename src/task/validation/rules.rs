//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one field. Rules return `Ok(())` on
//! success or the [`FieldViolation`] tagged to that field on failure.

use std::ops::RangeInclusive;

use super::{FieldViolation, TaskField, ValidationErrors};
use crate::task::domain::{CompletePercent, TaskDetails};

/// Accepted title length in characters.
pub const TITLE_LENGTH: RangeInclusive<usize> = 3..=60;

/// Accepted description length in characters.
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 5..=200;

/// Validates a create or update payload.
///
/// Title and description are checked independently; a failing title does
/// not suppress the description check.
///
/// # Errors
///
/// Returns [`ValidationErrors`] holding every violated field.
pub fn validate_details(details: &TaskDetails) -> Result<(), ValidationErrors> {
    let violations = [
        validate_title(&details.title).err(),
        validate_description(&details.description).err(),
    ];
    ValidationErrors::from_violations(violations.into_iter().flatten()).map_or(Ok(()), Err)
}

/// Validates the title length.
///
/// # Errors
///
/// Returns a [`TaskField::Title`] violation when the length lies outside
/// [`TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), FieldViolation> {
    validate_length(TaskField::Title, title, &TITLE_LENGTH)
}

/// Validates the description length.
///
/// # Errors
///
/// Returns a [`TaskField::Description`] violation when the length lies
/// outside [`DESCRIPTION_LENGTH`].
pub fn validate_description(description: &str) -> Result<(), FieldViolation> {
    validate_length(TaskField::Description, description, &DESCRIPTION_LENGTH)
}

/// Validates a completion percentage payload.
///
/// # Errors
///
/// Returns a [`TaskField::CompletePercent`] violation when the value is
/// outside `[0, 100]`.
pub fn validate_complete_percent(value: f64) -> Result<CompletePercent, FieldViolation> {
    CompletePercent::new(value).map_err(|_| {
        FieldViolation::new(
            TaskField::CompletePercent,
            format!(
                "'{}' must be between {} and {}. You entered {value}.",
                TaskField::CompletePercent.label(),
                CompletePercent::MIN_VALUE,
                CompletePercent::MAX_VALUE,
            ),
        )
    })
}

fn validate_length(
    field: TaskField,
    value: &str,
    bounds: &RangeInclusive<usize>,
) -> Result<(), FieldViolation> {
    let length = value.chars().count();
    if bounds.contains(&length) {
        return Ok(());
    }
    Err(FieldViolation::new(
        field,
        format!(
            "'{}' must be between {} and {} characters. You entered {length} characters.",
            field.label(),
            bounds.start(),
            bounds.end(),
        ),
    ))
}

//! Field validation for task payloads.
//!
//! Each field is checked by an independent rule so every violation in a
//! payload is reported together. Rules never mutate their input and never
//! touch storage.

mod error;
pub mod rules;

pub use error::{FieldViolation, TaskField, ValidationErrors};
pub use rules::{
    DESCRIPTION_LENGTH, TITLE_LENGTH, validate_complete_percent, validate_description,
    validate_details, validate_title,
};

//! Diesel row models for task persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due instant.
    pub expire: DateTime<Utc>,
    /// Completion percentage.
    pub complete_percent: f64,
    /// Cached done flag.
    pub is_done: bool,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due instant.
    pub expire: DateTime<Utc>,
    /// Completion percentage.
    pub complete_percent: f64,
    /// Cached done flag.
    pub is_done: bool,
}

/// Full-field changeset for task records.
///
/// `complete_percent` and `is_done` always travel together.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due instant.
    pub expire: DateTime<Utc>,
    /// Completion percentage.
    pub complete_percent: f64,
    /// Cached done flag.
    pub is_done: bool,
}

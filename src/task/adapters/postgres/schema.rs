//! Diesel schema for task persistence.

diesel::table! {
    /// To-do records.
    todos (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 60]
        title -> Varchar,
        /// Task description.
        #[max_length = 200]
        description -> Varchar,
        /// Due instant.
        expire -> Timestamptz,
        /// Completion percentage.
        complete_percent -> Float8,
        /// Cached done flag, written together with `complete_percent`.
        is_done -> Bool,
    }
}

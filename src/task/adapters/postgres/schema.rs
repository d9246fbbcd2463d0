//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, each owned by a single user.
    tasks (id) {
        /// Store-generated task identifier.
        id -> Int8,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form task description.
        description -> Text,
        /// Status code (`0` pending, `1` done).
        status -> Int2,
        /// Owning user.
        #[sql_name = "userId"]
        user_id -> Int8,
        /// Creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
        /// Last update timestamp, unset until the first update.
        #[sql_name = "updatedAt"]
        updated_at -> Nullable<Timestamptz>,
    }
}

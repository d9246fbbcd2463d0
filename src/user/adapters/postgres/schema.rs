//! Diesel schema for user records.

diesel::table! {
    /// Users owning tasks.
    users (id) {
        /// Store-generated user identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique e-mail address.
        #[max_length = 255]
        email -> Varchar,
        /// Creation timestamp.
        #[sql_name = "createdAt"]
        created_at -> Timestamptz,
    }
}

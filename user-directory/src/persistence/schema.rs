//! Diesel table definitions for the directory schema.
//!
//! These definitions must match the database migrations exactly; regenerate
//! with `diesel print-schema` when the schema changes.

diesel::table! {
    /// User accounts table.
    users (id) {
        /// Primary key.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Optional contact address.
        email -> Nullable<Varchar>,
    }
}

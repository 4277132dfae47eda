//! REST API handlers.

pub mod users;

//! REST API handlers.

pub mod admin;

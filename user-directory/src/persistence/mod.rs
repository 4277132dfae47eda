//! PostgreSQL persistence adapter for the user store port.
//!
//! Thin translation layer only: Diesel rows in, domain records out. No
//! business logic lives here.

pub mod diesel_store;
pub mod pool;
mod rows;
mod schema;

pub use diesel_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};

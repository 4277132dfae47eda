//! Domain types and the store port for the user directory.

pub mod store;
pub mod user;

pub use self::store::{StoreError, UserStore};
pub use self::user::User;

//! Login-form library modules.

pub mod auth;
pub mod credentials;
pub mod http;
pub mod pages;
pub mod session;

pub use credentials::{CredentialsError, LoginCredentials};
pub use session::SessionContext;

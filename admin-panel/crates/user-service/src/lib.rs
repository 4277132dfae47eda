//! User service collaborator consumed by the admin-panel HTTP layer.
//!
//! In hexagonal terms [`UserService`] is a driving port: the HTTP handler
//! calls it without knowing where the admin record comes from, so tests can
//! substitute a double and the service crate can evolve independently of the
//! web layer, mirroring the original project's module split.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin user record served by `GET /admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Display name shown to callers.
    #[schema(example = "admin")]
    pub name: String,
}

impl User {
    /// Build a user from a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Supplies the default admin record.
///
/// `default_admin` has a provided implementation building the record from
/// [`UserService::default_admin_name`]; implementors that hold a richer
/// record can override it.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Display name of the default admin.
    async fn default_admin_name(&self) -> String;

    /// The default admin record.
    async fn default_admin(&self) -> User {
        User::named(self.default_admin_name().await)
    }
}

/// [`UserService`] backed by a fixed name decided at construction.
#[derive(Debug, Clone)]
pub struct StaticUserService {
    name: String,
}

impl StaticUserService {
    /// Default admin name used when no override is configured.
    pub const DEFAULT_NAME: &'static str = "admin";

    /// Create a service returning the given admin name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for StaticUserService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

#[async_trait]
impl UserService for StaticUserService {
    async fn default_admin_name(&self) -> String {
        self.name.clone()
    }
}

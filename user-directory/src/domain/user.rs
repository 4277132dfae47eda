//! Directory user record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user row keyed by its primary id.
///
/// The record carries exactly what the directory stores; there is no
/// validation beyond what the database schema enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Primary key.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Optional contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

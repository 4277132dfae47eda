//! Port abstraction for user lookup adapters and their errors.
//!
//! The HTTP layer depends on [`UserStore`] only; the production adapter runs
//! SQL against PostgreSQL while tests substitute an in-memory double.

use async_trait::async_trait;

use super::User;

/// Errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection { message: String },

    /// Query failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Fetches user rows by primary key.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by id, returning `None` when no row matches.
    async fn user_by_id(&self, id: i32) -> Result<Option<User>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::connection("refused"), "user store connection failed: refused")]
    #[case(StoreError::query("syntax"), "user store query failed: syntax")]
    fn errors_render_their_message(#[case] error: StoreError, #[case] rendered: &str) {
        assert_eq!(error.to_string(), rendered);
    }
}

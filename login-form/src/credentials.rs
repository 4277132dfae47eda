//! Validated login credentials.
//!
//! Keep form parsing outside the credential check by validating string inputs
//! before a handler compares them against anything.

use std::fmt;

use zeroize::Zeroizing;

/// Error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// Login was missing or blank once trimmed.
    EmptyLogin,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLogin => write!(f, "login must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `login` is trimmed and non-empty after trimming.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    login: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw login/password inputs.
    pub fn try_from_parts(login: &str, password: &str) -> Result<Self, CredentialsError> {
        let normalized = login.trim();
        if normalized.is_empty() {
            return Err(CredentialsError::EmptyLogin);
        }

        if password.is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self {
            login: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Login string suitable for user lookups.
    pub fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

//! Credential check against the fixture account.
//!
//! The example validates against a single hardcoded pair; there is no account
//! store and no hashing, by design.

use web_common::{ApiResult, Error};

use crate::credentials::LoginCredentials;

const FIXTURE_LOGIN: &str = "admin";
const FIXTURE_PASSWORD: &str = "123";

/// Validate credentials and return the authenticated login name.
pub fn authenticate(credentials: &LoginCredentials) -> ApiResult<String> {
    if credentials.login() == FIXTURE_LOGIN && credentials.password() == FIXTURE_PASSWORD {
        Ok(credentials.login().to_owned())
    } else {
        Err(Error::unauthorized("invalid login or password!"))
    }
}

//! Login and home page handlers.
//!
//! ```text
//! GET  /login          -> login form
//! POST /login          -> 303 to /home on success, re-rendered form otherwise
//! GET  /home           -> home page
//! ```

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use web_common::ApiResult;

use crate::auth::authenticate;
use crate::credentials::LoginCredentials;
use crate::pages;
use crate::session::SessionContext;

const INVALID_CREDENTIALS: &str = "invalid login or password!";

/// Form body bound from `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(mime_html())
        .body(body)
}

const fn mime_html() -> &'static str {
    "text/html; charset=utf-8"
}

/// Render the login form.
#[get("/login")]
pub async fn show_login_form() -> HttpResponse {
    html(pages::login_page(None))
}

/// Validate submitted credentials.
///
/// Success persists the login in the cookie session and redirects to the
/// home page; any failure re-renders the form with the error banner.
#[post("/login")]
pub async fn submit_login_form(
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&form.login, &form.password) {
        Ok(credentials) => credentials,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type(mime_html())
                .body(pages::login_page(Some(INVALID_CREDENTIALS))));
        }
    };

    match authenticate(&credentials) {
        Ok(login) => {
            session.persist_user(&login)?;
            info!(user = %login, "login succeeded");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/home"))
                .finish())
        }
        Err(_) => Ok(HttpResponse::Unauthorized()
            .content_type(mime_html())
            .body(pages::login_page(Some(INVALID_CREDENTIALS)))),
    }
}

/// Render the home page, greeting the signed-in user when a session exists.
#[get("/home")]
pub async fn show_home(session: SessionContext) -> ApiResult<HttpResponse> {
    let user = session.current_user()?;
    Ok(html(pages::home_page(user.as_deref())))
}

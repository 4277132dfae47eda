//! Login-form entry point: wires the login/home pages, cookie sessions, and
//! health probes.

use std::env;
use std::net::SocketAddr;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::{web, App, HttpServer};
use tracing::warn;

use login_form::http::{show_home, show_login_form, submit_login_form};
use web_common::health::{live, ready};
use web_common::{telemetry, HealthState, Trace};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init();

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        App::new()
            .app_data(server_health_state.clone())
            .wrap(Trace)
            // Probes first: the page scope has an empty prefix and would
            // otherwise shadow /health/*.
            .service(ready)
            .service(live)
            .service(
                web::scope("")
                    .wrap(session)
                    .service(show_login_form)
                    .service(submit_login_form)
                    .service(show_home),
            )
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

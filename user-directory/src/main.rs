//! User-directory entry point: wires the users endpoint, the PostgreSQL
//! store, and health probes.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use user_directory::api::users::show_user;
use user_directory::domain::UserStore;
use user_directory::persistence::{DbPool, DieselUserStore, PoolConfig};
#[cfg(debug_assertions)]
use user_directory::ApiDoc;
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

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
    let store: Arc<dyn UserStore> = Arc::new(DieselUserStore::new(pool));
    let store = web::Data::new(store);

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(store.clone())
            .wrap(Trace)
            .service(show_user)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

//! Admin-panel entry point: wires the admin endpoint and health probes.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use admin_panel::api::admin::show_default_admin;
#[cfg(debug_assertions)]
use admin_panel::ApiDoc;
use user_service::{StaticUserService, UserService};
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

    let admin_name =
        env::var("ADMIN_NAME").unwrap_or_else(|_| StaticUserService::DEFAULT_NAME.into());
    let service: Arc<dyn UserService> = Arc::new(StaticUserService::new(admin_name));
    let service = web::Data::new(service);

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(service.clone())
            .wrap(Trace)
            .service(show_default_admin)
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

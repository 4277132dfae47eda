//! Admin endpoint.
//!
//! ```text
//! GET /admin -> {"name":"admin"}
//! ```

use std::sync::Arc;

use actix_web::{get, web};
use user_service::{User, UserService};
use web_common::ApiResult;

/// Return the default admin user.
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Default admin user", body = User),
        (status = 500, description = "Internal server error", body = web_common::Error)
    ),
    tags = ["admin"],
    operation_id = "showDefaultAdmin"
)]
#[get("/admin")]
pub async fn show_default_admin(
    service: web::Data<Arc<dyn UserService>>,
) -> ApiResult<web::Json<User>> {
    Ok(web::Json(service.default_admin().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use user_service::StaticUserService;

    fn service_data(name: &str) -> web::Data<Arc<dyn UserService>> {
        let service: Arc<dyn UserService> = Arc::new(StaticUserService::new(name));
        web::Data::new(service)
    }

    #[actix_web::test]
    async fn returns_default_admin_as_json() {
        let app = test::init_service(
            App::new()
                .app_data(service_data("admin"))
                .service(show_default_admin),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let user: User = test::read_body_json(res).await;
        assert_eq!(user, User::named("admin"));
    }

    #[actix_web::test]
    async fn reflects_configured_admin_name() {
        let app = test::init_service(
            App::new()
                .app_data(service_data("operator"))
                .service(show_default_admin),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        let user: User = test::read_body_json(res).await;
        assert_eq!(user.name, "operator");
    }
}

//! OpenAPI documentation configuration.
//!
//! Swagger UI is mounted in debug builds only; the document registers the
//! admin endpoint and the shared health probes.

use utoipa::OpenApi;

/// OpenAPI document for the admin-panel API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin panel API",
        description = "Example service returning the default admin user."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::admin::show_default_admin,
        web_common::health::ready,
        web_common::health::live,
    ),
    components(schemas(user_service::User, web_common::Error, web_common::ErrorCode))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/admin"));
    }
}

//! OpenAPI documentation configuration.

use utoipa::OpenApi;

/// OpenAPI document for the user-directory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Example service serving user rows by id."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::users::show_user,
        web_common::health::ready,
        web_common::health::live,
    ),
    components(schemas(crate::domain::User, web_common::Error, web_common::ErrorCode))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_users_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users/{id}"));
    }
}

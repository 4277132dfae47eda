//! Users endpoint.
//!
//! ```text
//! GET /users/{id} -> {"id":1,"name":"Ada Lovelace"}
//! ```

use std::sync::Arc;

use actix_web::{get, web};
use web_common::{ApiResult, Error};

use crate::domain::{StoreError, User, UserStore};

fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => Error::service_unavailable(message),
        StoreError::Query { message } => Error::internal(message),
    }
}

/// Return the user row matching the given id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User primary key")),
    responses(
        (status = 200, description = "User row", body = User),
        (status = 404, description = "No user with this id", body = Error),
        (status = 503, description = "Store unreachable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{id}")]
pub async fn show_user(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    let user = store
        .user_by_id(id)
        .await
        .map_err(map_store_error)?
        .ok_or_else(|| Error::not_found(format!("no user with id {id}")))?;

    Ok(web::Json(user))
}

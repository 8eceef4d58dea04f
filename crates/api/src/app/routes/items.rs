use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use uuid::Uuid;

use wicket_auth::Permission;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::CurrentUser;

const CREATE_ITEM: &[Permission] = &[Permission::ItemsCreate];
const READ_ITEMS: &[Permission] = &[Permission::ItemsRead];
// Updating implies reading the current state first.
const UPDATE_ITEM: &[Permission] = &[Permission::ItemsRead, Permission::ItemsUpdate];
const DELETE_ITEM: &[Permission] = &[Permission::ItemsDelete];

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", patch(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, CREATE_ITEM) {
        return resp;
    }

    match services.items.create(body.name) {
        Ok(item) => (StatusCode::CREATED, Json(dto::ItemResponse::from(item))).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, READ_ITEMS) {
        return resp;
    }

    match services.items.list() {
        Ok(items) => {
            let items: Vec<dto::ItemResponse> =
                items.into_iter().map(dto::ItemResponse::from).collect();
            Json(items).into_response()
        }
        Err(e) => errors::domain_error(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, UPDATE_ITEM) {
        return resp;
    }

    match services.items.update(id, body.name) {
        Ok(item) => Json(dto::ItemResponse::from(item)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, DELETE_ITEM) {
        return resp;
    }

    match services.items.delete(id) {
        Ok(()) => Json(serde_json::json!({
            "result": format!("item with id {id} has been deleted"),
        }))
        .into_response(),
        Err(e) => errors::domain_error(e),
    }
}

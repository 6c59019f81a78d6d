//! Item routes: CRUD, the soft-delete lifecycle, and bulk operations.
//!
//! Every handler runs through [`CurrentUser`] first, then scopes all
//! repository calls to that user's ID. Lookups that miss (including
//! other users' item IDs) answer 404 with "Item not found".

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use taskforge_core::validation::DEFAULT_PAGE_LIMIT;
use taskforge_core::{Item, ItemPatch, ItemStatus};
use taskforge_store::{CreateItemOptions, ItemRepo, ListItemsOptions};

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::server::AppState;

/// Body for `POST /items`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Title, at least five characters.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Initial status; omitted means `Pending`.
    pub status: Option<ItemStatus>,
}

/// Query parameters for `GET /items`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Rows to skip (default 0).
    #[serde(default)]
    pub offset: i64,
    /// Page size (default 20, max 100).
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Exact status filter.
    pub status: Option<ItemStatus>,
    /// `false` lists live items, `true` lists soft-deleted items.
    #[serde(default)]
    pub include_deleted: bool,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

/// `POST /items` — create an item owned by the caller.
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::create(
        &conn,
        &CreateItemOptions {
            owner_id: &user.id,
            title: &req.title,
            description: req.description.as_deref(),
            status: req.status,
        },
    )?;
    info!(item_id = %item.id, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items` — list the caller's items, newest first.
pub async fn list_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let conn = state.pool.get()?;
    let items = ItemRepo::list(
        &conn,
        &user.id,
        &ListItemsOptions {
            status: params.status,
            include_deleted: params.include_deleted,
            offset: params.offset,
            limit: params.limit,
        },
    )?;
    Ok(Json(items))
}

/// `GET /items/{id}` — fetch one item, soft-deleted or not.
pub async fn get_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::get_scoped(&conn, &item_id, &user.id)?
        .ok_or_else(ApiError::item_not_found)?;
    Ok(Json(item))
}

/// `PATCH /items/{id}` — apply a partial update.
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<Item>, ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::get_scoped(&conn, &item_id, &user.id)?
        .ok_or_else(ApiError::item_not_found)?;
    let updated = ItemRepo::update(&conn, &item, &patch)?;
    Ok(Json(updated))
}

/// `DELETE /items/{id}` — soft-delete; the row stays recoverable.
pub async fn soft_delete_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::get_scoped(&conn, &item_id, &user.id)?
        .ok_or_else(ApiError::item_not_found)?;
    let deleted = ItemRepo::soft_delete(&conn, &item)?;
    info!(item_id = %deleted.id, "soft-deleted item");
    Ok(Json(deleted))
}

/// `PATCH /items/{id}/restore` — clear the soft-delete marker.
pub async fn restore_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::get_scoped(&conn, &item_id, &user.id)?
        .ok_or_else(ApiError::item_not_found)?;
    let restored = ItemRepo::restore(&conn, &item)?;
    info!(item_id = %restored.id, "restored item");
    Ok(Json(restored))
}

/// `DELETE /items/{id}/permanent` — remove the row for good.
pub async fn permanent_delete_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.pool.get()?;
    let item = ItemRepo::get_scoped(&conn, &item_id, &user.id)?
        .ok_or_else(ApiError::item_not_found)?;
    ItemRepo::permanent_delete(&conn, &item)?;
    info!(item_id = %item.id, "permanently deleted item");
    Ok(Json(json!({ "ok": true })))
}

/// `DELETE /items` — soft-delete a batch of IDs.
///
/// IDs the caller does not own are silently skipped; the response is
/// the affected subset.
pub async fn soft_delete_items_bulk(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(item_ids): Json<Vec<String>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let conn = state.pool.get()?;
    let affected = ItemRepo::soft_delete_many(&conn, &item_ids, &user.id)?;
    info!(
        requested = item_ids.len(),
        affected = affected.len(),
        "bulk soft-delete"
    );
    Ok(Json(affected))
}

/// `DELETE /items/bulk/permanent` — permanently delete a batch of IDs.
pub async fn permanent_delete_items_bulk(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(item_ids): Json<Vec<String>>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.pool.get()?;
    ItemRepo::permanent_delete_many(&conn, &item_ids, &user.id)?;
    info!(requested = item_ids.len(), "bulk permanent delete");
    Ok(Json(json!({ "ok": true })))
}

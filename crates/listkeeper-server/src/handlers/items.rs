//! Item handlers: append, check/uncheck, remove.
//!
//! All of them answer with the full list as it stands after the mutation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use listkeeper_store::TodoList;

use crate::error::ApiError;
use crate::schema::items::{CheckedStateRequest, CreateItemRequest, UpdateItemRequest};
use crate::state::AppState;

/// Appends an unchecked item.
///
/// `POST /api/lists/{list_id}/items`
pub async fn create_item(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<TodoList>), ApiError> {
    let list = state.dal.create_item(&list_id, &req.label)?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Sets an item's checked flag, item named in the body.
///
/// `PATCH /api/lists/{list_id}/checked_state`
pub async fn set_checked_state(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Json(req): Json<CheckedStateRequest>,
) -> Result<Json<TodoList>, ApiError> {
    let list = state
        .dal
        .set_item_checked(&list_id, &req.item_id, req.checked)?;
    Ok(Json(list))
}

/// Sets an item's checked flag, item named in the path.
///
/// `PATCH /api/lists/{list_id}/items/{item_id}`
pub async fn update_item(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(String, String)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<TodoList>, ApiError> {
    let list = state.dal.set_item_checked(&list_id, &item_id, req.checked)?;
    Ok(Json(list))
}

/// Removes an item.
///
/// `DELETE /api/lists/{list_id}/items/{item_id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Result<Json<TodoList>, ApiError> {
    Ok(Json(state.dal.delete_item(&list_id, &item_id)?))
}

//! List management handlers (list, create, get, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use listkeeper_store::{ListSummary, TodoList};

use crate::error::ApiError;
use crate::schema::lists::{CreateListRequest, CreateListResponse};
use crate::state::AppState;

/// Lists all lists as summaries, sorted by name.
///
/// `GET /api/lists`
pub async fn list_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListSummary>>, ApiError> {
    let summaries = state.dal.list_summaries()?;
    Ok(Json(summaries.collect()))
}

/// Creates a new empty list.
///
/// `POST /api/lists`
pub async fn create_list(
    State(state): State<AppState>,
    Json(req): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<CreateListResponse>), ApiError> {
    let id = state.dal.create_list(&req.name)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateListResponse { id, name: req.name }),
    ))
}

/// Fetches one list with all its items.
///
/// `GET /api/lists/{list_id}`
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Json<TodoList>, ApiError> {
    Ok(Json(state.dal.get_list(&list_id)?))
}

/// Deletes a list and everything in it.
///
/// `DELETE /api/lists/{list_id}`
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    if !state.dal.delete_list(&list_id)? {
        return Err(ApiError::NotFound(format!("list not found: {list_id}")));
    }
    Ok(Json(true))
}

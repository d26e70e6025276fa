//! Router assembly for the listkeeper HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive: the browser client is served from another origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/lists",
            get(handlers::lists::list_lists).post(handlers::lists::create_list),
        )
        .route(
            "/api/lists/{list_id}",
            get(handlers::lists::get_list).delete(handlers::lists::delete_list),
        )
        .route(
            "/api/lists/{list_id}/items",
            post(handlers::items::create_item),
        )
        // Trailing-slash form kept for older clients.
        .route(
            "/api/lists/{list_id}/items/",
            post(handlers::items::create_item),
        )
        .route(
            "/api/lists/{list_id}/items/{item_id}",
            patch(handlers::items::update_item).delete(handlers::items::delete_item),
        )
        .route(
            "/api/lists/{list_id}/checked_state",
            patch(handlers::items::set_checked_state),
        )
        .route("/api/dummy", get(handlers::system::dummy))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

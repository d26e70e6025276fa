//! Diagnostic handlers.

use axum::Json;
use listkeeper_store::ListId;

use crate::schema::system::DummyResponse;

/// Returns a freshly minted list-style ID and the current time without
/// touching storage.
///
/// `GET /api/dummy`
pub async fn dummy() -> Json<DummyResponse> {
    Json(DummyResponse {
        id: ListId::mint(),
        when: chrono::Utc::now(),
    })
}

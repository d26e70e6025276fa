//! Diagnostic endpoint types.

use chrono::{DateTime, Utc};
use listkeeper_store::ListId;
use serde::Serialize;

/// Response of `GET /api/dummy`: a freshly minted ID and the server time.
#[derive(Debug, Clone, Serialize)]
pub struct DummyResponse {
    pub id: ListId,
    pub when: DateTime<Utc>,
}

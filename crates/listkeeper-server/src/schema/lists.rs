//! List management request/response types.

use listkeeper_store::ListId;
use serde::{Deserialize, Serialize};

/// Request to create a new list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListRequest {
    /// Display name; need not be unique.
    pub name: String,
}

/// Response from creating a list.
#[derive(Debug, Clone, Serialize)]
pub struct CreateListResponse {
    /// The store-assigned list identifier.
    pub id: ListId,
    pub name: String,
}

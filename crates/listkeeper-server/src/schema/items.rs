//! Item request types.

use serde::Deserialize;

/// Request to append an item to a list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub label: String,
}

/// Body of `PATCH /api/lists/{list_id}/checked_state`.
///
/// `checked_state` is accepted as an alias of `checked`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckedStateRequest {
    pub item_id: String,
    #[serde(alias = "checked_state")]
    pub checked: bool,
}

/// Body of `PATCH /api/lists/{list_id}/items/{item_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(alias = "checked_state")]
    pub checked: bool,
}

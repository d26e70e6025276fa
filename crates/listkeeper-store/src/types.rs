//! Identity and entity types for stored lists.
//!
//! [`ListId`] is defined here because list identity is a storage concern:
//! lists only gain an ID when the store inserts them. [`ItemId`] is minted by
//! the data-access layer before the append reaches the store, so no round trip
//! is needed to learn it.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Length of a list identity token in hex characters (12 bytes).
pub const LIST_ID_LEN: usize = 24;

/// Unique identifier for a stored list.
///
/// A 12-byte object identifier rendered as 24 lowercase hex characters:
/// 4-byte big-endian seconds timestamp, 5 bytes of per-process randomness and
/// a 3-byte wrapping counter. Construct via [`ListId::mint`] (store side) or
/// [`ListId::parse`] (caller-supplied tokens).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListId(String);

fn process_unique() -> &'static [u8; 5] {
    static BYTES: OnceLock<[u8; 5]> = OnceLock::new();
    BYTES.get_or_init(|| rand::thread_rng().gen())
}

fn next_counter() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicU32::new(rand::thread_rng().gen()))
        .fetch_add(1, Ordering::Relaxed)
        & 0x00ff_ffff
}

impl ListId {
    /// Mints a fresh identifier.
    pub fn mint() -> Self {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let counter = next_counter();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process_unique());
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        ListId(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Validates a caller-supplied token.
    ///
    /// Accepts exactly 24 hex digits in either case and normalizes to
    /// lowercase.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        if raw.len() != LIST_ID_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StoreError::InvalidArgument(format!(
                "list id must be {LIST_ID_LEN} hex characters, got {raw:?}"
            )));
        }
        Ok(ListId(raw.to_ascii_lowercase()))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an item within its list.
///
/// Random UUID v4, serialized as a hyphenated lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Mints a fresh random identifier.
    pub fn mint() -> Self {
        ItemId(Uuid::new_v4())
    }

    /// Validates a caller-supplied token.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        Uuid::parse_str(raw)
            .map(ItemId)
            .map_err(|e| StoreError::InvalidArgument(format!("item id {raw:?}: {e}")))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// An entry embedded in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub label: String,
    pub checked: bool,
}

impl TodoItem {
    /// A new unchecked item with a freshly minted ID.
    pub fn new(label: impl Into<String>) -> Self {
        TodoItem {
            id: ItemId::mint(),
            label: label.into(),
            checked: false,
        }
    }
}

/// A list document with its items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Looks up an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == *id)
    }
}

/// Projection of a list for listing: no item bodies, just the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub item_count: usize,
}

/// Single-pass cursor over list summaries, ordered by name.
///
/// Consuming the cursor exhausts it; run the query again for a fresh pass.
#[derive(Debug)]
pub struct ListSummaries {
    rows: std::vec::IntoIter<ListSummary>,
}

impl ListSummaries {
    pub(crate) fn new(rows: Vec<ListSummary>) -> Self {
        ListSummaries {
            rows: rows.into_iter(),
        }
    }
}

impl Iterator for ListSummaries {
    type Item = ListSummary;

    fn next(&mut self) -> Option<ListSummary> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for ListSummaries {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_list_ids_are_well_formed_and_distinct() {
        let a = ListId::mint();
        let b = ListId::mint();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), LIST_ID_LEN);
        assert_eq!(ListId::parse(a.as_str()).unwrap(), a);
    }

    #[test]
    fn list_id_parse_normalizes_case() {
        let id = ListId::parse("65A1B2C3D4E5F60718293A4B").unwrap();
        assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn list_id_parse_rejects_malformed_tokens() {
        for raw in ["", "abc", "65a1b2c3d4e5f60718293a4", "65a1b2c3d4e5f60718293a4bz", "zza1b2c3d4e5f60718293a4b"] {
            let err = ListId::parse(raw).unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)), "{raw:?}");
        }
    }

    #[test]
    fn item_id_round_trips_through_display() {
        let id = ItemId::mint();
        assert_eq!(ItemId::parse(&id.to_string()).unwrap(), id);
        assert!(ItemId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn new_items_start_unchecked() {
        let item = TodoItem::new("milk");
        assert_eq!(item.label, "milk");
        assert!(!item.checked);
    }

    #[test]
    fn item_serializes_with_string_id() {
        let item = TodoItem::new("eggs");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], serde_json::json!(item.id.to_string()));
        assert_eq!(json["label"], "eggs");
        assert_eq!(json["checked"], false);
    }
}

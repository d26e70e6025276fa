//! The [`ListStore`] trait defining the storage contract for list documents.
//!
//! Every method is one atomic operation against the backend. Mutations of the
//! embedded items array return the post-mutation document from the same
//! operation, never from a separate follow-up read, so concurrent appends to one
//! list cannot observe each other's intermediate state.
//!
//! Methods take already-validated [`ListId`] / [`ItemId`] values: malformed
//! tokens are rejected by [`crate::dal::ListDal`] before a backend sees them.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait and are
//! swappable behind `Arc<dyn ListStore>`.

use crate::error::StoreError;
use crate::types::{ItemId, ListId, ListSummaries, TodoItem, TodoList};

/// The storage contract for list documents.
///
/// Implementations are shared across request handlers, so they take `&self`
/// and serialize access to their underlying connection internally.
pub trait ListStore: Send + Sync {
    /// Performs a trivial round trip to verify the backend is reachable.
    fn ping(&self) -> Result<(), StoreError>;

    /// All lists projected to `(id, name, item_count)`, ordered by name.
    ///
    /// The count is computed by the backend; item bodies are not loaded.
    fn list_summaries(&self) -> Result<ListSummaries, StoreError>;

    /// Inserts a new empty list and returns its store-assigned ID.
    fn create_list(&self, name: &str) -> Result<ListId, StoreError>;

    /// Fetches one list with its items in stored order.
    fn get_list(&self, id: &ListId) -> Result<TodoList, StoreError>;

    /// Removes a list. Returns whether exactly one document was removed.
    fn delete_list(&self, id: &ListId) -> Result<bool, StoreError>;

    /// Appends `item` to the end of the list and returns the updated list.
    fn append_item(&self, id: &ListId, item: &TodoItem) -> Result<TodoList, StoreError>;

    /// Sets the checked flag of one item and returns the updated list.
    ///
    /// An unknown `item_id` leaves the list untouched and still returns it.
    fn set_item_checked(
        &self,
        id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<TodoList, StoreError>;

    /// Removes one item and returns the updated list.
    ///
    /// An unknown `item_id` leaves the list untouched and still returns it.
    fn remove_item(&self, id: &ListId, item_id: &ItemId) -> Result<TodoList, StoreError>;
}

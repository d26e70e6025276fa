//! [`ListDal`]: the data-access contract consumed by the transport layer.
//!
//! Callers hand in raw string identities; every token is validated into a
//! [`ListId`] / [`ItemId`] before the backend is touched, so a malformed ID is
//! always an `InvalidArgument` and never an ambiguous "not found". Item IDs
//! are minted here, ahead of the append, rather than by the backend.

use std::sync::Arc;

use crate::error::StoreError;
use crate::traits::ListStore;
use crate::types::{ItemId, ListId, ListSummaries, TodoItem, TodoList};

/// Data-access object over a shared [`ListStore`].
///
/// Cheap to clone; all clones share the same backend handle.
#[derive(Clone)]
pub struct ListDal {
    store: Arc<dyn ListStore>,
}

impl ListDal {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        ListDal { store }
    }

    /// Round trip to the backend, used as a startup connectivity check.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.store.ping()
    }

    /// All lists as `(id, name, item_count)`, ordered by name.
    pub fn list_summaries(&self) -> Result<ListSummaries, StoreError> {
        self.store.list_summaries()
    }

    /// Creates an empty list and returns its new ID.
    pub fn create_list(&self, name: &str) -> Result<ListId, StoreError> {
        let id = self.store.create_list(name)?;
        tracing::debug!(list_id = %id, name, "created list");
        Ok(id)
    }

    pub fn get_list(&self, list_id: &str) -> Result<TodoList, StoreError> {
        let id = ListId::parse(list_id)?;
        self.store.get_list(&id)
    }

    /// Deletes a list; `false` if the well-formed ID matched nothing.
    pub fn delete_list(&self, list_id: &str) -> Result<bool, StoreError> {
        let id = ListId::parse(list_id)?;
        let removed = self.store.delete_list(&id)?;
        tracing::debug!(list_id = %id, removed, "delete list");
        Ok(removed)
    }

    /// Appends a new unchecked item and returns the updated list.
    pub fn create_item(&self, list_id: &str, label: &str) -> Result<TodoList, StoreError> {
        let id = ListId::parse(list_id)?;
        let item = TodoItem::new(label);
        tracing::debug!(list_id = %id, item_id = %item.id, "appending item");
        self.store.append_item(&id, &item)
    }

    /// Sets an item's checked flag and returns the updated list.
    ///
    /// An unknown item ID is not an error: the list comes back unchanged.
    pub fn set_item_checked(
        &self,
        list_id: &str,
        item_id: &str,
        checked: bool,
    ) -> Result<TodoList, StoreError> {
        let id = ListId::parse(list_id)?;
        let item_id = ItemId::parse(item_id)?;
        tracing::debug!(list_id = %id, item_id = %item_id, checked, "setting checked state");
        self.store.set_item_checked(&id, &item_id, checked)
    }

    /// Removes an item and returns the updated list.
    pub fn delete_item(&self, list_id: &str, item_id: &str) -> Result<TodoList, StoreError> {
        let id = ListId::parse(list_id)?;
        let item_id = ItemId::parse(item_id)?;
        tracing::debug!(list_id = %id, item_id = %item_id, "removing item");
        self.store.remove_item(&id, &item_id)
    }
}

//! In-memory implementation of [`ListStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral sessions,
//! and anywhere persistence isn't needed (`memory://`). It keeps list documents
//! in a HashMap behind a single mutex, which makes every operation atomic with
//! identical semantics to the SQLite backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::traits::ListStore;
use crate::types::{ItemId, ListId, ListSummaries, ListSummary, TodoItem, TodoList};

/// Data stored for a single list.
#[derive(Debug, Clone)]
struct StoredList {
    name: String,
    items: Vec<TodoItem>,
}

impl StoredList {
    fn to_list(&self, id: &ListId) -> TodoList {
        TodoList {
            id: id.clone(),
            name: self.name.clone(),
            items: self.items.clone(),
        }
    }
}

/// In-memory implementation of [`ListStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: Mutex<HashMap<ListId, StoredList>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ListId, StoredList>>, StoreError> {
        self.lists
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".into()))
    }

    /// Applies `update` to one stored list under the lock and returns the
    /// resulting document.
    fn update_list<F>(&self, id: &ListId, update: F) -> Result<TodoList, StoreError>
    where
        F: FnOnce(&mut StoredList),
    {
        let mut lists = self.lock()?;
        let stored = lists
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        update(stored);
        Ok(stored.to_list(id))
    }
}

impl ListStore for InMemoryStore {
    fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }

    fn list_summaries(&self) -> Result<ListSummaries, StoreError> {
        let lists = self.lock()?;
        let mut rows: Vec<ListSummary> = lists
            .iter()
            .map(|(id, stored)| ListSummary {
                id: id.clone(),
                name: stored.name.clone(),
                item_count: stored.items.len(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(ListSummaries::new(rows))
    }

    fn create_list(&self, name: &str) -> Result<ListId, StoreError> {
        let mut lists = self.lock()?;
        let id = ListId::mint();
        lists.insert(
            id.clone(),
            StoredList {
                name: name.to_string(),
                items: Vec::new(),
            },
        );
        Ok(id)
    }

    fn get_list(&self, id: &ListId) -> Result<TodoList, StoreError> {
        let lists = self.lock()?;
        lists
            .get(id)
            .map(|stored| stored.to_list(id))
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn delete_list(&self, id: &ListId) -> Result<bool, StoreError> {
        Ok(self.lock()?.remove(id).is_some())
    }

    fn append_item(&self, id: &ListId, item: &TodoItem) -> Result<TodoList, StoreError> {
        self.update_list(id, |stored| stored.items.push(item.clone()))
    }

    fn set_item_checked(
        &self,
        id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<TodoList, StoreError> {
        self.update_list(id, |stored| {
            if let Some(item) = stored.items.iter_mut().find(|item| item.id == *item_id) {
                item.checked = checked;
            }
        })
    }

    fn remove_item(&self, id: &ListId, item_id: &ItemId) -> Result<TodoList, StoreError> {
        self.update_list(id, |stored| {
            if let Some(pos) = stored.items.iter().position(|item| item.id == *item_id) {
                stored.items.remove(pos);
            }
        })
    }
}

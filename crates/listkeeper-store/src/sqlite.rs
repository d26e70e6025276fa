//! SQLite implementation of [`ListStore`].
//!
//! [`SqliteStore`] keeps each list as one row whose `items` column is a JSON
//! array document. Item mutations are single `UPDATE ... RETURNING` statements
//! built from SQLite's JSON1 functions, so the write and the returned document
//! come from the same atomic step. Summaries compute `item_count` with
//! `json_array_length` inside the query engine.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StoreError;
use crate::traits::ListStore;
use crate::types::{ItemId, ListId, ListSummaries, ListSummary, TodoItem, TodoList};

const SELECT_LIST: &str = "SELECT id, name, items FROM lists WHERE id = ?1";

const APPEND_ITEM: &str = "UPDATE lists SET items = json_insert(items, '$[#]', json(?2)) \
     WHERE id = ?1 RETURNING id, name, items";

// ?2 = item id, ?3 = 'true' / 'false'. The EXISTS guard keeps the row untouched
// when no embedded item matches.
const SET_ITEM_CHECKED: &str = "UPDATE lists SET items = json_set(items, \
         '$[' || (SELECT je.key FROM json_each(lists.items) AS je \
                  WHERE json_extract(je.value, '$.id') = ?2 LIMIT 1) || '].checked', \
         json(?3)) \
     WHERE id = ?1 AND EXISTS (SELECT 1 FROM json_each(lists.items) AS je \
                               WHERE json_extract(je.value, '$.id') = ?2) \
     RETURNING id, name, items";

const REMOVE_ITEM: &str = "UPDATE lists SET items = json_remove(items, \
         '$[' || (SELECT je.key FROM json_each(lists.items) AS je \
                  WHERE json_extract(je.value, '$.id') = ?2 LIMIT 1) || ']') \
     WHERE id = ?1 AND EXISTS (SELECT 1 FROM json_each(lists.items) AS je \
                               WHERE json_extract(je.value, '$.id') = ?2) \
     RETURNING id, name, items";

/// A list row as read from SQLite, before decoding the items document.
struct ListRow {
    id: String,
    name: String,
    items: String,
}

impl ListRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ListRow {
            id: row.get(0)?,
            name: row.get(1)?,
            items: row.get(2)?,
        })
    }

    fn decode(self) -> Result<TodoList, StoreError> {
        Ok(TodoList {
            id: ListId::parse(&self.id)?,
            name: self.name,
            items: serde_json::from_str(&self.items)?,
        })
    }
}

/// SQLite-backed implementation of [`ListStore`].
///
/// The connection sits behind a mutex so the store can be shared across
/// handler tasks; each trait call holds it for exactly one statement (or one
/// transaction where a fallback read is needed).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("sqlite connection lock poisoned".into()))
    }

    /// Runs an item-level `UPDATE ... RETURNING` statement. When the guard
    /// matched nothing, reads the list inside the same transaction so the
    /// caller still gets the current document (or `NotFound`).
    fn update_item(
        &self,
        sql: &str,
        id: &ListId,
        item_id: &ItemId,
        extra: Option<&str>,
    ) -> Result<TodoList, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let item_key = item_id.to_string();

        let updated = match extra {
            Some(value) => tx
                .query_row(sql, params![id.as_str(), item_key, value], ListRow::from_row)
                .optional()?,
            None => tx
                .query_row(sql, params![id.as_str(), item_key], ListRow::from_row)
                .optional()?,
        };

        let row = match updated {
            Some(row) => row,
            None => {
                tracing::debug!(list_id = %id, item_id = %item_id, "no matching item, list unchanged");
                tx.query_row(SELECT_LIST, params![id.as_str()], ListRow::from_row)
                    .optional()?
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?
            }
        };
        tx.commit()?;
        row.decode()
    }
}

impl ListStore for SqliteStore {
    fn ping(&self) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
        if one != 1 {
            return Err(StoreError::Unavailable(format!(
                "ping returned {one}, expected 1"
            )));
        }
        Ok(())
    }

    fn list_summaries(&self) -> Result<ListSummaries, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, json_array_length(items) FROM lists ORDER BY name, id",
        )?;
        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let name: String = row.get(1)?;
            let count: i64 = row.get(2)?;
            Ok((id, name, count))
        })?;

        let mut result = Vec::new();
        for row in rows {
            let (id, name, count) = row?;
            result.push(ListSummary {
                id: ListId::parse(&id)?,
                name,
                item_count: usize::try_from(count).unwrap_or_default(),
            });
        }
        Ok(ListSummaries::new(result))
    }

    fn create_list(&self, name: &str) -> Result<ListId, StoreError> {
        let conn = self.conn()?;
        let id = ListId::mint();
        conn.execute(
            "INSERT INTO lists (id, name, items) VALUES (?1, ?2, '[]')",
            params![id.as_str(), name],
        )?;
        Ok(id)
    }

    fn get_list(&self, id: &ListId) -> Result<TodoList, StoreError> {
        let conn = self.conn()?;
        conn.query_row(SELECT_LIST, params![id.as_str()], ListRow::from_row)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.clone()))?
            .decode()
    }

    fn delete_list(&self, id: &ListId) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM lists WHERE id = ?1", params![id.as_str()])?;
        Ok(removed == 1)
    }

    fn append_item(&self, id: &ListId, item: &TodoItem) -> Result<TodoList, StoreError> {
        let document = serde_json::to_string(item)?;
        let conn = self.conn()?;
        conn.query_row(
            APPEND_ITEM,
            params![id.as_str(), document],
            ListRow::from_row,
        )
        .optional()?
        .ok_or_else(|| StoreError::NotFound(id.clone()))?
        .decode()
    }

    fn set_item_checked(
        &self,
        id: &ListId,
        item_id: &ItemId,
        checked: bool,
    ) -> Result<TodoList, StoreError> {
        let flag = if checked { "true" } else { "false" };
        self.update_item(SET_ITEM_CHECKED, id, item_id, Some(flag))
    }

    fn remove_item(&self, id: &ListId, item_id: &ItemId) -> Result<TodoList, StoreError> {
        self.update_item(REMOVE_ITEM, id, item_id, None)
    }
}

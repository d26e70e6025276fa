//! Connection-string parsing: picks and opens a backend.
//!
//! Recognized forms:
//! - `memory://` : [`InMemoryStore`]
//! - `sqlite::memory:` : in-memory SQLite database
//! - `sqlite://<path>` or a bare filesystem path : SQLite database file

use std::sync::Arc;

use crate::error::StoreError;
use crate::memory::InMemoryStore;
use crate::sqlite::SqliteStore;
use crate::traits::ListStore;

/// A parsed database connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUri {
    Memory,
    SqliteMemory,
    SqliteFile(String),
}

impl DatabaseUri {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(StoreError::UnsupportedUri("empty database uri".into()));
        }
        if raw == "memory://" {
            return Ok(DatabaseUri::Memory);
        }
        if raw == "sqlite::memory:" || raw == ":memory:" {
            return Ok(DatabaseUri::SqliteMemory);
        }
        if let Some(path) = raw.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err(StoreError::UnsupportedUri(raw.to_string()));
            }
            return Ok(DatabaseUri::SqliteFile(path.to_string()));
        }
        if raw.contains("://") {
            return Err(StoreError::UnsupportedUri(raw.to_string()));
        }
        Ok(DatabaseUri::SqliteFile(raw.to_string()))
    }

    /// Opens the backend this URI names.
    pub fn open(&self) -> Result<Arc<dyn ListStore>, StoreError> {
        let store: Arc<dyn ListStore> = match self {
            DatabaseUri::Memory => Arc::new(InMemoryStore::new()),
            DatabaseUri::SqliteMemory => Arc::new(SqliteStore::in_memory()?),
            DatabaseUri::SqliteFile(path) => Arc::new(SqliteStore::new(path)?),
        };
        Ok(store)
    }
}

/// Parses `raw` and opens the backend it names.
pub fn open_store(raw: &str) -> Result<Arc<dyn ListStore>, StoreError> {
    let uri = DatabaseUri::parse(raw)?;
    tracing::info!(?uri, "opening list store");
    uri.open()
}

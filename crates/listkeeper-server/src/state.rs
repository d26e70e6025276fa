//! Application state shared by every handler.
//!
//! [`AppState`] carries the one [`ListDal`] built at startup; axum hands it to
//! each handler through `State`. The backend serializes access to its own
//! connection, so the state needs no lock of its own.

use std::sync::Arc;

use listkeeper_store::{open_store, InMemoryStore, ListDal, ListStore, StoreError};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// The data-access contract over the shared store handle.
    pub dal: ListDal,
}

impl AppState {
    /// Wraps an already opened store.
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        AppState {
            dal: ListDal::new(store),
        }
    }

    /// Opens the store named by the config and checks it answers a ping.
    pub fn from_config(config: &ServerConfig) -> Result<Self, StoreError> {
        let state = Self::new(open_store(&config.database_uri)?);
        state.dal.ping()?;
        Ok(state)
    }

    /// Creates an `AppState` backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}

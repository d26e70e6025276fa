//! Storage layer for listkeeper list documents.
//!
//! Provides the [`ListStore`] trait defining the storage contract that all
//! backends implement, the [`InMemoryStore`] and [`SqliteStore`] backends, and
//! [`ListDal`], the string-keyed data-access contract the transport layer calls.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum and its contract-level [`ErrorKind`]
//! - [`types`]: ListId, ItemId, TodoList, TodoItem, ListSummary
//! - [`traits`]: ListStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema and migration setup
//! - [`sqlite`]: SqliteStore implementation
//! - [`uri`]: connection-string parsing
//! - [`dal`]: ListDal data-access contract

pub mod dal;
pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;
pub mod uri;

// Re-export key types for ergonomic use.
pub use dal::ListDal;
pub use error::{ErrorKind, StoreError};
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ListStore;
pub use types::{ItemId, ListId, ListSummaries, ListSummary, TodoItem, TodoList};
pub use uri::{open_store, DatabaseUri};

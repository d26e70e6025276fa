//! Storage error types for listkeeper-store.
//!
//! [`StoreError`] covers every failure the data-access layer can surface:
//! missing lists, malformed identity tokens, and backend failures (SQLite,
//! migrations, document (de)serialization). [`StoreError::kind`] collapses
//! them into the three kinds callers are expected to branch on.

use thiserror::Error;

use crate::types::ListId;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No list document matched the given ID.
    #[error("list not found: {0}")]
    NotFound(ListId),

    /// A caller-supplied identity token was malformed.
    ///
    /// Raised before any query is sent to the backend.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The SQLite backend reported an error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The connection string does not name a supported backend.
    #[error("unsupported database uri: {0}")]
    UnsupportedUri(String),

    /// The backend is unusable (failed ping, poisoned connection lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced list does not exist.
    NotFound,
    /// The request carried a malformed identity token.
    InvalidArgument,
    /// The storage connection or operation failed.
    Storage,
}

impl StoreError {
    /// Returns the contract-level kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            StoreError::Sqlite(_)
            | StoreError::Migration(_)
            | StoreError::Serialization(_)
            | StoreError::UnsupportedUri(_)
            | StoreError::Unavailable(_) => ErrorKind::Storage,
        }
    }
}

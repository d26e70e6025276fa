//! HTTP/JSON API server for listkeeper lists.
//!
//! A thin transport over [`listkeeper_store::ListDal`]: configuration, route
//! definitions, request/response schema types, and error-to-status mapping.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;

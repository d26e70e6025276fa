//! HTTP handler modules for the listkeeper API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`listkeeper_store::ListDal`], and return JSON responses. No business logic
//! lives in handlers.

pub mod items;
pub mod lists;
pub mod system;

//! API schema types for request/response definitions.
//!
//! Entities returned by the data-access layer (`TodoList`, `ListSummary`)
//! serialize directly; these modules hold the request bodies and the few
//! response shapes that differ from them.

pub mod items;
pub mod lists;
pub mod system;

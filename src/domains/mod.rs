//! Domains module containing business logic organized by bounded contexts.
//!
//! - **topics**: The documentation catalog and retrieval pipeline
//! - **tools**: The `get_docs` tool surface
//! - **resources**: The `practice://` resource surface

pub mod resources;
pub mod tools;
pub mod topics;

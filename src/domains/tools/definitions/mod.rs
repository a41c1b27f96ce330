//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod get_docs;

pub use get_docs::{GetDocsParams, GetDocsTool};

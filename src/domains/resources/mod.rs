//! Resources domain module.
//!
//! Every catalog topic is exposed as a `practice://<topic>` resource.
//!
//! ## Architecture
//!
//! - `uri.rs` - Bidirectional topic/URI mapping
//! - `registry.rs` - Listing entries and the URI template
//! - `service.rs` - Resource service for listing and reading
//! - `error.rs` - Resource errors and their protocol mapping

mod error;
mod registry;
mod service;
pub mod uri;

pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::ResourceService;
pub use uri::{SCHEME, parse_uri, to_uri};

// Security module for storage containment checks
//
// Every documentation read goes through the path guard, which derives the
// storage location from the catalog and proves it lies inside the
// configured documentation root before any I/O takes place.

pub mod path_guard;

pub use path_guard::{PathGuard, ResolvedLocation, StorageRootError};

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::Level;

use crate::core::logging::SharedSink;
use crate::domains::topics::{Topic, TopicError};

/// Errors raised while setting up the guard.
#[derive(Debug, thiserror::Error)]
pub enum StorageRootError {
    #[error("Cannot canonicalize storage root '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Storage root '{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

/// A storage location proven to lie inside the storage root.
///
/// Only [`PathGuard`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    topic: String,
    path: PathBuf,
}

impl ResolvedLocation {
    /// The topic key this location was derived for.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Derives storage locations and proves they stay inside the storage root.
pub struct PathGuard {
    root: PathBuf,
    sink: SharedSink,
}

impl std::fmt::Debug for PathGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathGuard").field("root", &self.root).finish()
    }
}

impl PathGuard {
    /// Create a guard for `root`, which must be an existing directory.
    ///
    /// The root is canonicalized once here; every later check compares
    /// against this canonical form.
    pub fn new(root: impl AsRef<Path>, sink: SharedSink) -> Result<Self, StorageRootError> {
        let root = root.as_ref();
        let canonical = root
            .canonicalize()
            .map_err(|error| StorageRootError::CannotCanonicalize {
                path: root.to_path_buf(),
                error,
            })?;

        if !canonical.is_dir() {
            return Err(StorageRootError::NotADirectory { path: canonical });
        }

        Ok(Self {
            root: canonical,
            sink,
        })
    }

    /// The canonical storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the storage location of a catalog topic.
    pub fn resolve(&self, topic: Topic) -> Result<ResolvedLocation, TopicError> {
        self.resolve_ref(topic.key(), topic.content_ref())
    }

    /// Resolve an arbitrary content reference on behalf of `topic`.
    ///
    /// Catalog entries are re-checked on every call, so a misconfigured
    /// reference is rejected the same way a hostile one would be.
    pub fn resolve_ref(
        &self,
        topic: &str,
        content_ref: &str,
    ) -> Result<ResolvedLocation, TopicError> {
        if let Some(reason) = lexical_violation(content_ref) {
            return Err(self.deny(topic, content_ref, None, reason));
        }

        let candidate = self.root.join(content_ref);

        let path = match candidate.canonicalize() {
            Ok(canonical) => {
                if !is_within_root(&canonical, &self.root) {
                    return Err(self.deny(
                        topic,
                        content_ref,
                        Some(&canonical),
                        "outside storage root",
                    ));
                }
                // Read through the canonical form, the one that was checked.
                canonical
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Nothing to read yet, but no existing component may lead
                // out of the root once the target appears.
                if let Some((path, reason)) = missing_target_violation(&self.root, content_ref) {
                    return Err(self.deny(topic, content_ref, Some(&path), &reason));
                }
                candidate
            }
            Err(e) => {
                let reason = format!("cannot canonicalize: {}", e);
                return Err(self.deny(topic, content_ref, Some(&candidate), &reason));
            }
        };

        Ok(ResolvedLocation {
            topic: topic.to_string(),
            path,
        })
    }

    fn deny(
        &self,
        topic: &str,
        content_ref: &str,
        path: Option<&Path>,
        reason: &str,
    ) -> TopicError {
        let mut fields = vec![
            ("topic", topic.to_string()),
            ("content_ref", content_ref.escape_debug().to_string()),
            ("root", self.root.display().to_string()),
            ("reason", reason.to_string()),
        ];
        if let Some(path) = path {
            fields.push(("path", path.display().to_string()));
        }

        self.sink.log(
            Level::ERROR,
            "Rejected storage location outside the documentation root",
            &fields,
        );
        TopicError::AccessDenied
    }
}

/// Reasons a content reference is rejected before touching the filesystem.
fn lexical_violation(content_ref: &str) -> Option<&'static str> {
    if content_ref.is_empty() {
        return Some("empty content reference");
    }
    if content_ref.contains('\0') {
        return Some("embedded NUL byte");
    }
    if has_drive_prefix(content_ref) {
        return Some("drive letter");
    }
    if content_ref.starts_with('/') || content_ref.starts_with('\\') {
        return Some("absolute path");
    }

    for component in Path::new(content_ref).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Some("parent directory component"),
            Component::RootDir | Component::Prefix(_) => return Some("absolute path"),
        }
    }

    // Backslash separated traversal is not split by `components` on unix.
    if content_ref.split(['/', '\\']).any(|segment| segment == "..") {
        return Some("parent directory component");
    }

    None
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Component-wise containment: `root` itself or a strict descendant.
fn is_within_root(path: &Path, root: &Path) -> bool {
    path == root || path.starts_with(root)
}

/// Checks the existing components of a missing `content_ref` under `root`.
///
/// Every component that is a symlink must resolve inside `root`. A dangling
/// symlink is a violation: its target could be created later, outside.
fn missing_target_violation(root: &Path, content_ref: &str) -> Option<(PathBuf, String)> {
    let mut current = root.to_path_buf();
    for component in Path::new(content_ref).components() {
        let Component::Normal(part) = component else {
            continue;
        };
        current.push(part);

        match current.symlink_metadata() {
            Ok(meta) if meta.file_type().is_symlink() => match current.canonicalize() {
                Ok(target) if is_within_root(&target, root) => {}
                Ok(target) => return Some((target, "outside storage root".to_string())),
                Err(e) => return Some((current, format!("dangling symlink: {}", e))),
            },
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => return Some((current, format!("cannot inspect: {}", e))),
        }
    }
    None
}

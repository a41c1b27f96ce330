//! Content loading for resolved topic locations.

use std::io;

use tracing::Level;

use super::error::TopicError;
use crate::core::logging::SharedSink;
use crate::core::security::ResolvedLocation;

/// Reads topic content from a [`ResolvedLocation`].
pub struct ContentLoader {
    sink: SharedSink,
}

impl ContentLoader {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Read the content at `location` verbatim.
    ///
    /// The read runs on the blocking pool and is attempted exactly once.
    pub async fn load(&self, location: &ResolvedLocation) -> Result<String, TopicError> {
        let path = location.path().to_path_buf();
        let read = tokio::task::spawn_blocking(move || std::fs::read_to_string(path)).await;

        match read {
            Ok(Ok(content)) => {
                self.sink.log(
                    Level::DEBUG,
                    "Loaded documentation",
                    &[
                        ("topic", location.topic().to_string()),
                        ("bytes", content.len().to_string()),
                    ],
                );
                Ok(content)
            }
            Ok(Err(e)) => Err(self.classify(location, &e)),
            Err(join_error) => {
                self.sink.log(
                    Level::ERROR,
                    "Documentation read task failed",
                    &[
                        ("topic", location.topic().to_string()),
                        ("error", join_error.to_string()),
                    ],
                );
                Err(TopicError::Unexpected)
            }
        }
    }

    fn classify(&self, location: &ResolvedLocation, error: &io::Error) -> TopicError {
        let fields = [
            ("topic", location.topic().to_string()),
            ("path", location.path().display().to_string()),
            ("error", error.to_string()),
            ("kind", format!("{:?}", error.kind())),
        ];

        match error.kind() {
            io::ErrorKind::NotFound => {
                self.sink.log(Level::WARN, "Documentation file not found", &fields);
                TopicError::not_found(location.topic())
            }
            _ => {
                self.sink.log(Level::ERROR, "Failed to read documentation", &fields);
                TopicError::ReadFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logging::MemorySink;
    use crate::core::security::PathGuard;
    use crate::domains::topics::Topic;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let content = "# React\n\n- keep components small\r\n\ttrailing  \n";
        fs::write(temp_dir.path().join("react.md"), content).unwrap();

        let sink = MemorySink::new();
        let guard = PathGuard::new(temp_dir.path(), sink.clone()).unwrap();
        let loader = ContentLoader::new(sink.clone());

        let location = guard.resolve(Topic::React).unwrap();
        assert_eq!(loader.load(&location).await.unwrap(), content);
        assert_eq!(sink.at_level(Level::DEBUG).len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let sink = MemorySink::new();
        let guard = PathGuard::new(temp_dir.path(), sink.clone()).unwrap();
        let loader = ContentLoader::new(sink.clone());

        let location = guard.resolve(Topic::Testing).unwrap();
        assert_eq!(
            loader.load(&location).await,
            Err(TopicError::not_found("testing"))
        );

        let warnings = sink.at_level(Level::WARN);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field("kind"), Some("NotFound"));
    }

    #[tokio::test]
    async fn test_directory_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("git.md")).unwrap();

        let sink = MemorySink::new();
        let guard = PathGuard::new(temp_dir.path(), sink.clone()).unwrap();
        let loader = ContentLoader::new(sink.clone());

        let location = guard.resolve(Topic::Git).unwrap();
        assert_eq!(loader.load(&location).await, Err(TopicError::ReadFailed));
        assert_eq!(sink.at_level(Level::ERROR).len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("security.md"), [0xff, 0xfe, 0x00]).unwrap();

        let sink = MemorySink::new();
        let guard = PathGuard::new(temp_dir.path(), sink.clone()).unwrap();
        let loader = ContentLoader::new(sink.clone());
        let location = guard.resolve(Topic::Security).unwrap();

        let result = tokio_test::block_on(loader.load(&location));
        assert_eq!(result, Err(TopicError::ReadFailed));

        let errors = sink.at_level(Level::ERROR);
        assert_eq!(errors[0].field("kind"), Some("InvalidData"));
    }

    #[test]
    fn test_permission_denied_is_read_failure() {
        let loader = ContentLoader::new(MemorySink::new());
        let temp_dir = TempDir::new().unwrap();
        let guard = PathGuard::new(temp_dir.path(), MemorySink::new()).unwrap();
        let location = guard.resolve(Topic::Accessibility).unwrap();

        let error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(loader.classify(&location, &error), TopicError::ReadFailed);
    }
}

//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default documentation root, relative to the working directory.
pub const DEFAULT_DOCS_PATH: &str = "docs";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Documentation storage configuration.
    pub docs: DocsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the documentation storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Directory holding one markdown file per topic.
    /// Canonicalized when the server is built; nothing outside it is read.
    pub root_path: PathBuf,

    /// Whether `root_path` came from `MCP_DOCS_PATH` rather than the default.
    #[serde(default)]
    pub from_env: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_DOCS_PATH),
            from_env: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "practice-docs-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            docs: DocsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default configuration serving documents from `root`.
    pub fn with_docs_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.docs.root_path = root.into();
        config
    }

    /// Load configuration from environment variables.
    ///
    /// Runs before logging is installed, so it records choices in the
    /// returned config instead of logging them.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCS_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var("MCP_DOCS_PATH") {
            Ok(path) if !path.trim().is_empty() => {
                config.docs.root_path = PathBuf::from(path);
                config.docs.from_env = true;
            }
            _ => {}
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_docs_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_PATH", "/srv/practice-docs");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.root_path, PathBuf::from("/srv/practice-docs"));
        assert!(config.docs.from_env);
        unsafe {
            std::env::remove_var("MCP_DOCS_PATH");
        }
    }

    #[test]
    fn test_docs_path_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DOCS_PATH", "  ");
        }
        let config = Config::from_env();
        assert_eq!(config.docs.root_path, PathBuf::from(DEFAULT_DOCS_PATH));
        assert!(!config.docs.from_env);
        unsafe {
            std::env::remove_var("MCP_DOCS_PATH");
        }
    }

    #[test]
    fn test_with_docs_root() {
        let config = Config::with_docs_root("/tmp/docs");
        assert_eq!(config.docs.root_path, PathBuf::from("/tmp/docs"));
        assert_eq!(config.server.name, "practice-docs-mcp");
    }
}

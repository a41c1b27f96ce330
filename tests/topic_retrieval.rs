//! End-to-end checks of topic retrieval through both server surfaces.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use practice_docs_mcp_server::core::{Config, McpServer, MemorySink, PathGuard};
use practice_docs_mcp_server::domains::resources::{parse_uri, to_uri};
use practice_docs_mcp_server::domains::topics::{Topic, TopicError, validate_topic};
use rmcp::model::{CallToolResult, ErrorCode, RawContent, ReadResourceResult, ResourceContents};
use tempfile::TempDir;
use tracing::Level;

fn shipped_docs() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("docs")
}

fn server_for(root: &Path) -> (McpServer, Arc<MemorySink>) {
    let sink = MemorySink::new();
    let server = McpServer::with_sink(Config::with_docs_root(root), sink.clone()).unwrap();
    (server, sink)
}

fn temp_docs() -> TempDir {
    let dir = TempDir::new().unwrap();
    for topic in Topic::ALL {
        fs::write(
            dir.path().join(topic.content_ref()),
            format!("# {}\n\nContent for {}.\n", topic.display_name(), topic.key()),
        )
        .unwrap();
    }
    dir
}

fn tool_text(result: &CallToolResult) -> &str {
    assert!(!result.is_error.unwrap_or(false), "tool failed: {:?}", result);
    let RawContent::Resource(embedded) = &result.content[0].raw else {
        panic!("Expected embedded resource, got {:?}", result.content[0].raw);
    };
    match &embedded.resource {
        ResourceContents::TextResourceContents { text, .. } => text,
        _ => panic!("Expected text resource contents"),
    }
}

fn tool_error(result: &CallToolResult) -> &str {
    assert!(result.is_error.unwrap_or(false), "tool succeeded: {:?}", result);
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

fn resource_text(result: &ReadResourceResult) -> (&str, Option<&str>, &str) {
    match &result.contents[0] {
        ResourceContents::TextResourceContents {
            uri,
            mime_type,
            text,
            ..
        } => (uri.as_str(), mime_type.as_deref(), text.as_str()),
        _ => panic!("Expected text resource contents"),
    }
}

#[tokio::test]
async fn shipped_docs_cover_the_catalog() {
    let (server, sink) = server_for(&shipped_docs());

    for topic in Topic::ALL {
        let text = tool_text(&server.get_docs(topic.key()).await).to_string();
        assert!(text.starts_with("# "), "{} has no title", topic);
    }
    assert!(sink.at_level(Level::ERROR).is_empty());
    assert!(sink.at_level(Level::WARN).is_empty());
}

#[tokio::test]
async fn tool_and_resource_surfaces_agree() {
    let dir = temp_docs();
    let (server, _) = server_for(dir.path());

    for topic in Topic::ALL {
        let tool = server.get_docs(topic.key()).await;
        let resource = server.read_docs_resource(&to_uri(topic)).await.unwrap();

        let (uri, mime_type, text) = resource_text(&resource);
        assert_eq!(uri, to_uri(topic));
        assert_eq!(mime_type, Some("text/markdown"));
        assert_eq!(tool_text(&tool), text);
    }
}

#[tokio::test]
async fn case_variants_resolve_to_the_same_content() {
    let dir = temp_docs();
    let (server, _) = server_for(dir.path());

    let lower = server.get_docs("react").await;
    for variant in ["REACT", "React", "rEaCt"] {
        let result = server.get_docs(variant).await;
        assert_eq!(tool_text(&result), tool_text(&lower));
    }
    assert_eq!(validate_topic("TYPESCRIPT"), validate_topic("typescript"));
}

#[tokio::test]
async fn traversal_requests_fail_validation_without_leaking_paths() {
    let dir = temp_docs();
    let (server, sink) = server_for(dir.path());
    let root = dir.path().to_string_lossy().to_string();

    for raw in [
        "../../etc/passwd",
        "..",
        "/etc/passwd",
        "react/../../secret",
        "C:\\Windows\\win.ini",
        "react\0",
        "%2e%2e%2fetc%2fpasswd",
    ] {
        let result = server.get_docs(raw).await;
        let message = tool_error(&result);
        assert!(message.starts_with("Invalid topic"), "{:?}: {}", raw, message);
        assert!(message.contains("react, typescript, testing, security, accessibility, git"));
        assert!(!message.contains("passwd"));
        assert!(!message.contains(&root));
    }

    // Rejected by the whitelist, so the containment check never ran.
    assert!(sink.at_level(Level::ERROR).is_empty());
}

#[tokio::test]
async fn unknown_topic_is_distinct_from_missing_content() {
    let dir = temp_docs();
    fs::remove_file(dir.path().join("security.md")).unwrap();
    let (server, _) = server_for(dir.path());

    let unknown = server.get_docs("nonexistent").await;
    assert!(tool_error(&unknown).starts_with("Invalid topic: unknown topic."));

    let missing = server.get_docs("security").await;
    assert_eq!(
        tool_error(&missing),
        "Documentation for topic 'security' not found"
    );

    let err = server
        .read_docs_resource("practice://security")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
}

#[tokio::test]
async fn malformed_resource_uri_is_invalid_not_missing() {
    let dir = temp_docs();
    let (server, _) = server_for(dir.path());

    assert_eq!(parse_uri("practice://react/extra"), None);
    let err = server
        .read_docs_resource("practice://react/extra")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.starts_with("Invalid resource URI"));

    for uri in ["PRACTICE://react", "practice://", "react", "file:///etc/passwd"] {
        let err = server.read_docs_resource(uri).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS, "{}", uri);
    }
}

#[tokio::test]
async fn listing_has_one_entry_per_topic() {
    let dir = temp_docs();
    let (server, _) = server_for(dir.path());

    let listed = server.list_resources().await;
    assert_eq!(listed.len(), Topic::ALL.len());

    let uris: std::collections::HashSet<_> = listed
        .iter()
        .map(|r| r["uri"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(uris.len(), listed.len());

    for entry in &listed {
        assert!(!entry["name"].as_str().unwrap().is_empty());
        assert!(!entry["description"].as_str().unwrap().is_empty());
        assert_eq!(entry["mimeType"], "text/markdown");
        let topic = parse_uri(entry["uri"].as_str().unwrap()).unwrap();
        assert_eq!(to_uri(topic), entry["uri"].as_str().unwrap());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_retrievals_do_not_interleave() {
    let dir = temp_docs();
    fs::write(dir.path().join("react.md"), "R".repeat(256 * 1024)).unwrap();
    fs::write(dir.path().join("git.md"), "G".repeat(256 * 1024)).unwrap();
    let (server, _) = server_for(dir.path());

    let mut handles = Vec::new();
    for i in 0..32 {
        let server = server.clone();
        let (topic, byte) = if i % 2 == 0 { ("react", 'R') } else { ("git", 'G') };
        handles.push(tokio::spawn(async move {
            let text = if i % 4 < 2 {
                tool_text(&server.get_docs(topic).await).to_string()
            } else {
                let uri = format!("practice://{}", topic);
                let result = server.read_docs_resource(&uri).await.unwrap();
                resource_text(&result).2.to_string()
            };
            (byte, text)
        }));
    }

    for handle in handles {
        let (byte, text) = handle.await.unwrap();
        assert_eq!(text.len(), 256 * 1024);
        assert!(text.chars().all(|c| c == byte));
    }
}

#[test]
fn generated_traversal_corpus_never_resolves() {
    let parent = TempDir::new().unwrap();
    let root = parent.path().join("docs");
    fs::create_dir(&root).unwrap();
    fs::write(parent.path().join("secret.md"), "secret").unwrap();

    let sink = MemorySink::new();
    let guard = PathGuard::new(&root, sink.clone()).unwrap();

    let prefixes = ["", "./", "guides/", "a/b/"];
    let escapes = ["..", "../..", "..\\..", "../docs-evil"];
    let targets = ["", "/secret.md", "/etc/passwd"];

    let mut corpus: Vec<String> = Vec::new();
    for prefix in prefixes {
        for escape in escapes {
            for target in targets {
                corpus.push(format!("{}{}{}", prefix, escape, target));
            }
        }
    }
    for absolute in ["/etc/passwd", "/", "\\\\server\\share", "C:\\x", "d:/x", "react.md\0.txt"] {
        corpus.push(absolute.to_string());
    }
    corpus.push(root.join("react.md").to_string_lossy().to_string());

    for content_ref in &corpus {
        assert_eq!(
            guard.resolve_ref("react", content_ref),
            Err(TopicError::AccessDenied),
            "{:?}",
            content_ref
        );
    }
    assert_eq!(sink.at_level(Level::ERROR).len(), corpus.len());
}

#[cfg(unix)]
#[tokio::test]
async fn escaping_symlink_is_denied_and_logged() {
    use std::os::unix::fs::symlink;

    let dir = temp_docs();
    let outside = TempDir::new().unwrap();
    let secret = outside.path().join("secret.md");
    fs::write(&secret, "top secret").unwrap();
    fs::remove_file(dir.path().join("git.md")).unwrap();
    symlink(&secret, dir.path().join("git.md")).unwrap();

    let (server, sink) = server_for(dir.path());

    let result = server.get_docs("git").await;
    let message = tool_error(&result);
    assert_eq!(message, "Access denied");

    let err = server.read_docs_resource("practice://git").await.unwrap_err();
    assert_eq!(err.message, "Access denied");

    let errors = sink.at_level(Level::ERROR);
    assert_eq!(errors.len(), 2);
    let logged_path = errors[0].field("path").unwrap();
    assert!(logged_path.ends_with("secret.md"));
    assert!(!message.contains(logged_path));
}

#[cfg(unix)]
#[tokio::test]
async fn dangling_symlink_is_denied_before_and_after_target_appears() {
    use std::os::unix::fs::symlink;

    let dir = temp_docs();
    let outside = TempDir::new().unwrap();
    let secret = outside.path().join("secret.md");
    fs::remove_file(dir.path().join("react.md")).unwrap();
    symlink(&secret, dir.path().join("react.md")).unwrap();

    let (server, sink) = server_for(dir.path());

    assert_eq!(tool_error(&server.get_docs("react").await), "Access denied");

    fs::write(&secret, "top secret outside the root").unwrap();
    let message = tool_error(&server.get_docs("react").await).to_string();
    assert_eq!(message, "Access denied");

    let err = server.read_docs_resource("practice://react").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    assert!(!err.message.contains("top secret"));

    assert_eq!(sink.at_level(Level::ERROR).len(), 3);
}

//! Logging capability injected into the topic retrieval components.
//!
//! The retrieval pipeline never logs through global state. Each component
//! is constructed with an [`EventSink`], so tests can capture exactly what
//! was recorded (and at which severity) without installing a subscriber.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Structured key/value pairs attached to an event.
pub type Fields<'a> = &'a [(&'static str, String)];

/// A sink for structured log events.
pub trait EventSink: Send + Sync {
    /// Record one event.
    fn log(&self, level: Level, message: &str, fields: Fields<'_>);
}

/// Shared handle to a sink.
pub type SharedSink = Arc<dyn EventSink>;

/// Sink that forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a shared tracing sink.
    pub fn shared() -> SharedSink {
        Arc::new(Self)
    }
}

impl EventSink for TracingSink {
    fn log(&self, level: Level, message: &str, fields: Fields<'_>) {
        let fields = RenderedFields(fields);
        if level == Level::ERROR {
            tracing::error!(target: "practice_docs", %fields, "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "practice_docs", %fields, "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "practice_docs", %fields, "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "practice_docs", %fields, "{}", message);
        } else {
            tracing::trace!(target: "practice_docs", %fields, "{}", message);
        }
    }
}

struct RenderedFields<'a>(Fields<'a>);

impl fmt::Display for RenderedFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:?}", key, value)?;
        }
        Ok(())
    }
}

/// An event captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl RecordedEvent {
    /// Look up a field value by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Sink that keeps events in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events recorded at exactly `level`.
    pub fn at_level(&self, level: Level) -> Vec<RecordedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

impl EventSink for MemorySink {
    fn log(&self, level: Level, message: &str, fields: Fields<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(RecordedEvent {
                level,
                message: message.to_string(),
                fields: fields.to_vec(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_events() {
        let sink = MemorySink::new();
        sink.log(Level::WARN, "first", &[("topic", "react".to_string())]);
        sink.log(Level::ERROR, "second", &[]);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].field("topic"), Some("react"));
        assert_eq!(sink.at_level(Level::ERROR).len(), 1);
        assert_eq!(sink.at_level(Level::ERROR)[0].message, "second");
    }

    #[test]
    fn test_rendered_fields() {
        let fields = [("a", "1".to_string()), ("b", "two".to_string())];
        assert_eq!(RenderedFields(&fields).to_string(), "a=\"1\" b=\"two\"");
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: must be a no-op rather than a panic.
        TracingSink.log(Level::ERROR, "denied", &[("path", "/tmp".to_string())]);
    }
}

//! The fixed topic catalog.
//!
//! Every retrievable document is a variant of [`Topic`]. Nothing whose key
//! is absent from this enum can be served.

use std::fmt;

/// A documentation topic known to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    React,
    TypeScript,
    Testing,
    Security,
    Accessibility,
    Git,
}

impl Topic {
    /// All topics, in listing order.
    pub const ALL: [Topic; 6] = [
        Topic::React,
        Topic::TypeScript,
        Topic::Testing,
        Topic::Security,
        Topic::Accessibility,
        Topic::Git,
    ];

    /// The lowercase key callers use to request this topic.
    pub const fn key(self) -> &'static str {
        match self {
            Topic::React => "react",
            Topic::TypeScript => "typescript",
            Topic::Testing => "testing",
            Topic::Security => "security",
            Topic::Accessibility => "accessibility",
            Topic::Git => "git",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Topic::React => "React Best Practices",
            Topic::TypeScript => "TypeScript Best Practices",
            Topic::Testing => "Testing Best Practices",
            Topic::Security => "Security Best Practices",
            Topic::Accessibility => "Accessibility Best Practices",
            Topic::Git => "Git Workflow Best Practices",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Topic::React => {
                "Component design, hooks, state management and rendering performance in React."
            }
            Topic::TypeScript => {
                "Type design, strictness settings and safe patterns for TypeScript codebases."
            }
            Topic::Testing => "Unit, integration and end-to-end testing strategies.",
            Topic::Security => "Input validation, secrets handling and common web vulnerabilities.",
            Topic::Accessibility => "Semantic markup, keyboard navigation and ARIA usage.",
            Topic::Git => "Branching, commit hygiene and code review workflow.",
        }
    }

    /// Storage identifier of the topic's content, relative to the docs root.
    pub const fn content_ref(self) -> &'static str {
        match self {
            Topic::React => "react.md",
            Topic::TypeScript => "typescript.md",
            Topic::Testing => "testing.md",
            Topic::Security => "security.md",
            Topic::Accessibility => "accessibility.md",
            Topic::Git => "git.md",
        }
    }

    /// Exact, case-sensitive lookup by key.
    pub fn from_key(key: &str) -> Option<Topic> {
        Self::ALL.into_iter().find(|topic| topic.key() == key)
    }

    /// Keys of every topic, in listing order.
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|topic| topic.key()).collect()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

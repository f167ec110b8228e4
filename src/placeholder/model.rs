//! Placeholder records

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a placeholder, never reused within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderId(pub u64);

impl fmt::Display for PlaceholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a placeholder is expanded in rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderMode {
    /// The tag is replaced by the raw content
    #[default]
    Replace,
    /// The content is wrapped between opening and closing tags
    Tag,
}

/// A named, reusable expansion unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub id: PlaceholderId,
    /// Name as it appears inside tags
    pub name: String,
    /// Expansion text, may be empty
    #[serde(default)]
    pub content: String,
    /// Display color; carries no meaning for substitution
    pub color: String,
    #[serde(default)]
    pub mode: PlaceholderMode,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Placeholder {
    /// Create a placeholder stamped with the current time
    pub fn new(id: PlaceholderId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: String::new(),
            color: color.into(),
            mode: PlaceholderMode::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the expansion mode
    pub fn with_mode(mut self, mode: PlaceholderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether the placeholder has no content yet
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

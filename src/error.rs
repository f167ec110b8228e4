//! Error types for editing, catalog, configuration and clipboard operations

use thiserror::Error;

use crate::placeholder::PlaceholderId;

/// Errors from cursor-aware tag editing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Insertion offset past the end of the text
    #[error("position {position} is outside the text (length {len})")]
    PositionOutOfRange { position: usize, len: usize },

    /// Insertion offset inside a multi-byte character
    #[error("position {position} is not on a character boundary")]
    NotCharBoundary { position: usize },

    /// `<name>` would not be recognised as a tag once inserted
    #[error("{name:?} cannot be used as a tag name")]
    InvalidTagName { name: String },
}

/// Errors from placeholder catalog mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Another live placeholder already uses the name
    #[error("a placeholder named {name:?} already exists")]
    DuplicateName { name: String },

    /// No placeholder with the given id
    #[error("placeholder not found: {id}")]
    NotFound { id: PlaceholderId },

    /// Names must be non-empty to form a tag
    #[error("placeholder name must not be empty")]
    EmptyName,

    /// `<name>` would not be recognised as a tag in template text
    #[error("{name:?} cannot be used as a tag name")]
    InvalidName { name: String },
}

/// Errors that can occur when loading configuration or catalog files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors from a single clipboard backend
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The backend cannot be used in this environment
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

//! Configuration for editing sessions

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::placeholder::{Catalog, Palette, PlaceholderMode};

/// Configuration options for an editing session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    /// Colors handed to new and edited placeholders
    pub palette: Palette,

    /// Maximum number of history entries, unbounded when `None`
    pub history_limit: Option<usize>,
}

/// TOML structure for deserializing session configuration
#[derive(Deserialize)]
struct TomlConfig {
    palette: Option<TomlPaletteSection>,
    history: Option<TomlHistorySection>,
}

#[derive(Deserialize)]
struct TomlPaletteSection {
    name: Option<String>,
    colors: Vec<String>,
}

#[derive(Deserialize)]
struct TomlHistorySection {
    limit: Option<usize>,
}

impl SessionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        log::debug!("config: loaded {}", path.display());
        Ok(config)
    }

    /// Load configuration from TOML string
    ///
    /// Missing sections keep their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let palette = match parsed.palette {
            Some(section) => {
                let mut palette = Palette::new(section.colors);
                palette.name = section.name;
                palette
            }
            None => Palette::default(),
        };

        Ok(SessionConfig {
            palette,
            history_limit: parsed.history.and_then(|h| h.limit),
        })
    }

    /// Set the color palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the history limit
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}

/// TOML structure for placeholder catalog files
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    placeholders: Vec<TomlPlaceholder>,
}

#[derive(Deserialize)]
struct TomlPlaceholder {
    name: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    mode: PlaceholderMode,
    color: Option<String>,
}

/// Load a placeholder catalog from TOML file
pub fn catalog_from_file(path: &Path, palette: &mut Palette) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let catalog = catalog_from_str(&content, palette)?;
    log::debug!("config: loaded {} placeholders from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a placeholder catalog from TOML string
///
/// Entries are `[[placeholders]]` tables with a `name` and optional
/// `content`, `mode` and `color`. Entries without a color take the next
/// one from `palette`.
pub fn catalog_from_str(content: &str, palette: &mut Palette) -> Result<Catalog, ConfigError> {
    let parsed: TomlCatalog = toml::from_str(content)?;
    let mut catalog = Catalog::new();
    for entry in parsed.placeholders {
        let color = entry.color.unwrap_or_else(|| palette.next_color());
        catalog.add(&entry.name, &entry.content, entry.mode, color)?;
    }
    Ok(catalog)
}

//! Display colors for placeholders
//!
//! Colors are opaque strings handed to the presentation layer. The palette
//! cycles through its list so that consecutive placeholders get distinct
//! colors and an edited placeholder gets a fresh one.

use serde::Deserialize;

use crate::error::ConfigError;

/// Color used when a palette has no entries
pub const FALLBACK_COLOR: &str = "#9e9e9e";

/// A cycling list of display colors
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    colors: Vec<String>,
    cursor: usize,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    name: Option<String>,
    colors: Vec<String>,
}

/// Default palette - Material 300 tones, readable on light and dark backgrounds
const DEFAULT_PALETTE: &str = r##"
name = "material"
colors = [
    "#e57373", # red
    "#64b5f6", # blue
    "#81c784", # green
    "#ffb74d", # orange
    "#ba68c8", # purple
    "#4db6ac", # teal
    "#f06292", # pink
    "#a1887f", # brown
]
"##;

impl Palette {
    /// Create a palette from an explicit list of colors
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            name: None,
            colors,
            cursor: 0,
        }
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        Ok(Palette {
            name: parsed.name,
            colors: parsed.colors,
            cursor: 0,
        })
    }

    /// The colors in cycling order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Pick the next color, wrapping around at the end
    pub fn next_color(&mut self) -> String {
        if self.colors.is_empty() {
            return FALLBACK_COLOR.to_string();
        }
        let color = self.colors[self.cursor % self.colors.len()].clone();
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }
}

impl Default for Palette {
    fn default() -> Self {
        // The embedded palette is a compile-time constant; parsing only fails if it is edited badly
        Self::from_str(DEFAULT_PALETTE).unwrap_or_else(|_| Self::new(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.name.as_deref(), Some("material"));
        assert_eq!(palette.colors().len(), 8);
        assert_eq!(palette.colors()[0], "#e57373");
    }

    #[test]
    fn test_next_color_cycles() {
        let mut palette = Palette::new(vec!["a".into(), "b".into()]);
        assert_eq!(palette.next_color(), "a");
        assert_eq!(palette.next_color(), "b");
        assert_eq!(palette.next_color(), "a");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut palette = Palette::new(Vec::new());
        assert_eq!(palette.next_color(), FALLBACK_COLOR);
    }

    #[test]
    fn test_parse_toml() {
        let palette = Palette::from_str(r##"colors = ["#111111", "#222222"]"##).expect("Should parse");
        assert_eq!(palette.name, None);
        assert_eq!(palette.colors(), ["#111111".to_string(), "#222222".to_string()]);
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Palette::from_str("colors = 12 {{").is_err());
    }
}

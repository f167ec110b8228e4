//! Checks for tags that no placeholder backs
//!
//! Rendering leaves such tags untouched, which is easy to miss in a long
//! prompt. The checks here report them with their location.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::grammar::{scan_tags, Span};
use crate::placeholder::Catalog;

/// A tag in template text that has no matching placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDiagnostic {
    /// Name inside the tag
    pub name: String,
    /// Byte range of the whole tag, brackets included
    pub span: Span,
}

impl TagDiagnostic {
    pub fn message(&self) -> String {
        format!("no placeholder named '{}'", self.name)
    }

    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        // ariadne counts characters, spans are bytes
        let start = char_offset(source, self.span.start);
        let end = char_offset(source, self.span.end);
        let message = self.message();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, start)
            .with_message(&message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message("this tag is left unexpanded")
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

/// Every tag occurrence in `text` whose name is not in the catalog
pub fn unknown_tags(text: &str, catalog: &Catalog) -> Vec<TagDiagnostic> {
    scan_tags(text)
        .into_iter()
        .filter(|(name, _)| !catalog.contains_name(name))
        .map(|(name, span)| TagDiagnostic { name, span })
        .collect()
}

fn char_offset(source: &str, byte: usize) -> usize {
    source
        .get(..byte)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| source.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PlaceholderMode;

    #[test]
    fn test_unknown_tags() {
        let mut catalog = Catalog::new();
        catalog
            .add("known", "", PlaceholderMode::Replace, "#fff".to_string())
            .unwrap();
        let found = unknown_tags("<known> <missing> <missing>", &catalog);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "missing");
        assert_eq!(found[0].span, 8..17);
    }

    #[test]
    fn test_no_unknown_tags() {
        assert!(unknown_tags("plain text", &Catalog::new()).is_empty());
    }

    #[test]
    fn test_format_mentions_name() {
        let diag = TagDiagnostic {
            name: "missing".to_string(),
            span: 6..15,
        };
        let out = diag.format("Hello <missing>!", "prompt.txt");
        assert!(out.contains("no placeholder named 'missing'"));
        assert!(out.contains("prompt.txt"));
    }

    #[test]
    fn test_char_offset_multibyte() {
        assert_eq!(char_offset("héllo", 3), 2);
        assert_eq!(char_offset("abc", 10), 3);
    }
}

//! Prompt Tags - reusable prompts with named placeholder tags
//!
//! A prompt is plain text containing tags such as `<topic>`. Each tag refers
//! to a placeholder in a catalog, which holds the text to expand and how to
//! expand it. This library renders prompts, edits tags at a caret position,
//! keeps the catalog consistent with the text, and tracks undo/redo history.
//!
//! # Example
//!
//! ```rust
//! use prompt_tags::{render_copyable, render_full, Catalog, PlaceholderMode};
//!
//! let mut catalog = Catalog::new();
//! catalog.add("lang", "Rust", PlaceholderMode::Replace, "#64b5f6".into()).unwrap();
//! catalog.add("code", "fn main() {}", PlaceholderMode::Tag, "#e57373".into()).unwrap();
//!
//! let text = "Review this <lang> code: <code>";
//! assert_eq!(render_full(text, catalog.iter()), "Review this Rust code: <code>");
//! assert_eq!(
//!     render_copyable(text, catalog.iter()),
//!     "Review this Rust code: <code>\nfn main() {}\n</code>"
//! );
//! ```

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod grammar;
pub mod history;
pub mod lint;
pub mod placeholder;
pub mod render;
pub mod session;
pub mod sync;

pub use clipboard::{Clipboard, ClipboardBackend, Osc52Clipboard, SystemClipboard};
pub use config::SessionConfig;
pub use editor::{insert_tag, rename_tag_occurrences, TagInsertion};
pub use error::{CatalogError, ClipboardError, ConfigError, EditError};
pub use history::History;
pub use lint::{unknown_tags, TagDiagnostic};
pub use placeholder::{Catalog, Palette, Placeholder, PlaceholderId, PlaceholderMode};
pub use render::{render, CopyablePolicy, FullPolicy, RenderPass, RenderPolicy};
pub use session::{Session, SessionObserver};
pub use sync::{reconcile, SyncChange, TagEvent};

/// Render the live preview: `Replace` placeholders expand, `Tag` ones stay as tags
///
/// # Example
///
/// ```rust
/// use prompt_tags::{render_full, Placeholder, PlaceholderId, PlaceholderMode};
///
/// let p = Placeholder::new(PlaceholderId(0), "ctx", "#fff")
///     .with_content("notes")
///     .with_mode(PlaceholderMode::Tag);
/// assert_eq!(render_full("see <ctx>", [&p]), "see <ctx>");
/// ```
pub fn render_full<'a>(text: &str, placeholders: impl IntoIterator<Item = &'a Placeholder>) -> String {
    render(text, placeholders, &FullPolicy)
}

/// Render the export text: every placeholder expands, `Tag` ones wrapped in tags
pub fn render_copyable<'a>(
    text: &str,
    placeholders: impl IntoIterator<Item = &'a Placeholder>,
) -> String {
    render(text, placeholders, &CopyablePolicy)
}

//! Tag grammar for template text
//!
//! A tag is the literal text `<name>` referencing a placeholder by name.
//! The lexer finds tags in free-form text; the helpers in [`tag`] build
//! tags and match them literally, whatever characters the name contains.

pub mod lexer;
pub mod tag;

pub use lexer::{is_tag_name, lex, scan_tags, Span, Token};
pub use tag::{closing_tag, format_tag, replace_tag, tag_pattern, wrap_in_tag};

//! Cursor-aware tag editing
//!
//! These functions are pure: they take the current text and return new
//! text. Keeping the placeholder catalog in step is the job of
//! [`crate::sync`].

use crate::error::EditError;
use crate::grammar::{format_tag, is_tag_name, replace_tag};

/// Result of inserting a tag into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInsertion {
    /// Text with the tag spliced in
    pub text: String,
    /// UTF-8 byte offset just after the inserted tag, where the caret belongs
    ///
    /// Hosts that track the caret in UTF-16 code units or characters must
    /// convert back from bytes.
    pub caret: usize,
}

/// Splice the tag `<name>` into `text` at byte offset `position`
///
/// `position` is a UTF-8 byte offset, not a UTF-16 code unit or character
/// index; hosts with another caret unit convert before calling. The offset
/// must lie within `0..=text.len()` and on a character boundary, and `name`
/// must form a tag the scanner recognises; otherwise the text is left alone
/// and an error is returned. Callers that track a caret outside the text
/// should clamp it first with [`clamp_position`].
pub fn insert_tag(name: &str, position: usize, text: &str) -> Result<TagInsertion, EditError> {
    if !is_tag_name(name) {
        return Err(EditError::InvalidTagName {
            name: name.to_string(),
        });
    }
    if position > text.len() {
        return Err(EditError::PositionOutOfRange {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(EditError::NotCharBoundary { position });
    }

    let tag = format_tag(name);
    let mut new_text = String::with_capacity(text.len() + tag.len());
    new_text.push_str(&text[..position]);
    new_text.push_str(&tag);
    new_text.push_str(&text[position..]);

    Ok(TagInsertion {
        text: new_text,
        caret: position + tag.len(),
    })
}

/// Clamp a caret position into `text`, snapping back to a character boundary
pub fn clamp_position(position: usize, text: &str) -> usize {
    let mut pos = position.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Replace every `<old_name>` in `text` with `<new_name>`
///
/// Call this before the placeholder record takes the new name so tags
/// already placed keep pointing at it.
pub fn rename_tag_occurrences(old_name: &str, new_name: &str, text: &str) -> String {
    if old_name == new_name {
        return text.to_string();
    }
    replace_tag(text, old_name, &format_tag(new_name))
}

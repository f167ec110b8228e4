//! Keeping the placeholder catalog in step with template text
//!
//! An empty placeholder lives exactly as long as its tag is in the text:
//! it is created the first time the tag appears and dropped when the last
//! occurrence goes away. Once a placeholder has content it is owned by the
//! catalog and survives the removal of its tag.

use std::collections::HashSet;

use crate::grammar::scan_tags;
use crate::placeholder::{Catalog, Palette, Placeholder, PlaceholderMode};

/// A change in tag presence observed in template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// The tag was inserted or typed
    Inserted { name: String },
    /// The last occurrence of the tag was deleted by editing
    Removed { name: String },
}

/// What applying a [`TagEvent`] did to the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum SyncChange {
    /// A placeholder was created for a new tag
    Created(Placeholder),
    /// An empty placeholder was dropped with its tag
    Removed(Placeholder),
    /// The tag went away but the placeholder has content and was kept
    Retained(Placeholder),
}

/// Apply a single tag event to the catalog
///
/// Returns `None` when the catalog needs no change: the tag was inserted
/// for a placeholder that already exists, or removed for one that doesn't.
pub fn apply_tag_event(
    catalog: &mut Catalog,
    palette: &mut Palette,
    event: &TagEvent,
) -> Option<SyncChange> {
    match event {
        TagEvent::Inserted { name } => {
            if catalog.contains_name(name) {
                return None;
            }
            let color = palette.next_color();
            match catalog.add(name, "", PlaceholderMode::Replace, color) {
                Ok(created) => {
                    log::debug!("sync: created placeholder for <{}>", name);
                    Some(SyncChange::Created(created.clone()))
                }
                Err(e) => {
                    log::warn!("sync: cannot create placeholder for <{}>: {}", name, e);
                    None
                }
            }
        }
        TagEvent::Removed { name } => {
            let existing = catalog.find_by_name(name)?;
            if !existing.is_empty() {
                log::trace!("sync: <{}> removed, keeping placeholder with content", name);
                return Some(SyncChange::Retained(existing.clone()));
            }
            let removed = catalog.remove_by_name(name)?;
            log::debug!("sync: dropped empty placeholder <{}>", name);
            Some(SyncChange::Removed(removed))
        }
    }
}

/// Tag events implied by the edit from `old_text` to `new_text`
///
/// Insertions come first, in order of first appearance in the new text,
/// followed by removals in order of first appearance in the old text.
pub fn tag_events(old_text: &str, new_text: &str) -> Vec<TagEvent> {
    let old_names = distinct_tag_names(old_text);
    let new_names = distinct_tag_names(new_text);
    let old_set: HashSet<&str> = old_names.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new_names.iter().map(String::as_str).collect();

    let inserted = new_names
        .iter()
        .filter(|n| !old_set.contains(n.as_str()))
        .map(|n| TagEvent::Inserted { name: n.clone() });
    let removed = old_names
        .iter()
        .filter(|n| !new_set.contains(n.as_str()))
        .map(|n| TagEvent::Removed { name: n.clone() });

    inserted.chain(removed).collect()
}

/// Bring the catalog in line with an edit from `old_text` to `new_text`
pub fn reconcile(
    old_text: &str,
    new_text: &str,
    catalog: &mut Catalog,
    palette: &mut Palette,
) -> Vec<SyncChange> {
    tag_events(old_text, new_text)
        .iter()
        .filter_map(|event| apply_tag_event(catalog, palette, event))
        .collect()
}

fn distinct_tag_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan_tags(text)
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

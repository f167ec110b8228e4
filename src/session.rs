//! Editing session: template text, placeholder catalog and history
//!
//! A [`Session`] is the single owner of everything a prompt editor mutates.
//! Each editor gets its own instance; nothing is shared between sessions.
//! Every change to the text goes through one path that records history and
//! reconciles the catalog, so undo/redo and free-form edits behave alike.
//!
//! Side effects meant for the user (notifications, focus changes) are not
//! performed here. They are reported to an injected [`SessionObserver`].

use crate::clipboard::Clipboard;
use crate::config::SessionConfig;
use crate::editor;
use crate::error::{CatalogError, EditError};
use crate::history::History;
use crate::placeholder::{Catalog, Palette, Placeholder, PlaceholderId, PlaceholderMode};
use crate::render::{render, CopyablePolicy, FullPolicy, RenderPolicy};
use crate::sync::{self, SyncChange, TagEvent};

/// Receives notifications about session changes
///
/// All methods default to doing nothing.
pub trait SessionObserver {
    /// A placeholder was created, explicitly or because its tag appeared
    fn placeholder_created(&mut self, _placeholder: &Placeholder) {}

    /// A placeholder was removed, explicitly or together with its tag
    fn placeholder_removed(&mut self, _placeholder: &Placeholder) {}

    /// A tag was inserted; `caret` is where the cursor belongs afterwards
    fn tag_inserted(&mut self, _name: &str, _caret: usize) {}

    /// A placeholder changed its name
    fn placeholder_renamed(&mut self, _old_name: &str, _placeholder: &Placeholder) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// One prompt being edited
pub struct Session {
    text: String,
    catalog: Catalog,
    history: History,
    palette: Palette,
    observer: Box<dyn SessionObserver>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Start with empty text and an empty catalog
    pub fn new(config: SessionConfig) -> Self {
        Self::from_parts(String::new(), Catalog::new(), config)
    }

    /// Resume from text and catalog provided by a storage layer
    ///
    /// The given text becomes the oldest history entry.
    pub fn from_parts(text: impl Into<String>, catalog: Catalog, config: SessionConfig) -> Self {
        let text = text.into();
        Self {
            history: History::with_initial(text.clone()).with_limit(config.history_limit),
            text,
            catalog,
            palette: config.palette,
            observer: Box::new(NoopObserver),
        }
    }

    /// Deliver notifications to `observer`
    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Hand back text and placeholders as plain data for storage
    pub fn into_parts(self) -> (String, Vec<Placeholder>) {
        (self.text, self.catalog.into_placeholders())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace the text after a free-form edit
    ///
    /// Placeholders are created for new tags and empty placeholders whose
    /// tags disappeared are removed.
    pub fn set_text(&mut self, text: impl Into<String>) -> Vec<SyncChange> {
        self.commit(text.into())
    }

    /// Insert the tag `<name>` at byte offset `position`
    ///
    /// Creates the placeholder if the catalog has none by that name. Returns
    /// the caret position after the tag.
    pub fn insert_tag(&mut self, name: &str, position: usize) -> Result<usize, EditError> {
        let insertion = editor::insert_tag(name, position, &self.text)?;

        let event = TagEvent::Inserted {
            name: name.to_string(),
        };
        if let Some(change) = sync::apply_tag_event(&mut self.catalog, &mut self.palette, &event) {
            self.notify(&change);
        }
        self.commit(insertion.text);

        self.observer.tag_inserted(name, insertion.caret);
        Ok(insertion.caret)
    }

    /// Create a placeholder explicitly
    pub fn add_placeholder(
        &mut self,
        name: &str,
        content: &str,
        mode: PlaceholderMode,
    ) -> Result<PlaceholderId, CatalogError> {
        let color = self.palette.next_color();
        let created = self.catalog.add(name, content, mode, color)?.clone();
        self.observer.placeholder_created(&created);
        Ok(created.id)
    }

    /// Remove a placeholder explicitly
    ///
    /// Its tags stay in the text and are no longer expanded.
    pub fn remove_placeholder(&mut self, id: PlaceholderId) -> Result<Placeholder, CatalogError> {
        let removed = self.catalog.remove(id)?;
        self.observer.placeholder_removed(&removed);
        Ok(removed)
    }

    /// Change a placeholder's content
    pub fn update_content(&mut self, id: PlaceholderId, content: &str) -> Result<(), CatalogError> {
        self.catalog.set_content(id, content)?;
        self.recolor(id)
    }

    /// Change a placeholder's expansion mode
    pub fn set_mode(&mut self, id: PlaceholderId, mode: PlaceholderMode) -> Result<(), CatalogError> {
        self.catalog.set_mode(id, mode)?;
        self.recolor(id)
    }

    /// Rename a placeholder along with every tag that refers to it
    ///
    /// The text is rewritten first, then the record takes the new name.
    pub fn rename_placeholder(&mut self, id: PlaceholderId, new_name: &str) -> Result<(), CatalogError> {
        self.catalog.check_rename(id, new_name)?;
        let old_name = match self.catalog.get(id) {
            Some(p) => p.name.clone(),
            None => return Err(CatalogError::NotFound { id }),
        };
        if old_name == new_name {
            return Ok(());
        }

        // The tag set maps one to one, so no reconciliation is needed
        let text = editor::rename_tag_occurrences(&old_name, new_name, &self.text);
        self.history.record(&text);
        self.text = text;

        self.catalog.set_name(id, new_name)?;
        self.recolor(id)?;
        if let Some(renamed) = self.catalog.get(id) {
            log::debug!("session: renamed <{}> to <{}>", old_name, new_name);
            self.observer.placeholder_renamed(&old_name, renamed);
        }
        Ok(())
    }

    /// Go back one history entry
    ///
    /// Returns the restored text, or `None` at the oldest entry. The restored
    /// text is reconciled like any other edit. Undoing a rename therefore
    /// does not rename the record back: the record keeps its new name and
    /// content, and the old tag that reappears gets a fresh empty placeholder.
    pub fn undo(&mut self) -> Option<&str> {
        let text = self.history.undo()?.to_string();
        self.commit(text);
        Some(&self.text)
    }

    /// Go forward one history entry
    ///
    /// Returns the restored text, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        let text = self.history.redo()?.to_string();
        self.commit(text);
        Some(&self.text)
    }

    pub fn undo_disabled(&self) -> bool {
        self.history.undo_disabled()
    }

    pub fn redo_disabled(&self) -> bool {
        self.history.redo_disabled()
    }

    /// Render the text with a custom policy
    pub fn render_with<P: RenderPolicy + ?Sized>(&self, policy: &P) -> String {
        render(&self.text, self.catalog.iter(), policy)
    }

    /// Live preview, with `Tag` placeholders left as tags
    pub fn render_full(&self) -> String {
        self.render_with(&FullPolicy)
    }

    /// Export text, with every placeholder expanded
    pub fn render_copyable(&self) -> String {
        self.render_with(&CopyablePolicy)
    }

    /// Copy the export text to the clipboard
    pub fn copy_copyable(&self, clipboard: &mut Clipboard) -> bool {
        clipboard.copy(&self.render_copyable())
    }

    fn commit(&mut self, text: String) -> Vec<SyncChange> {
        self.history.record(&text);
        let old = std::mem::replace(&mut self.text, text);
        let changes = sync::reconcile(&old, &self.text, &mut self.catalog, &mut self.palette);
        for change in &changes {
            self.notify(change);
        }
        changes
    }

    fn notify(&mut self, change: &SyncChange) {
        match change {
            SyncChange::Created(p) => self.observer.placeholder_created(p),
            SyncChange::Removed(p) => self.observer.placeholder_removed(p),
            SyncChange::Retained(_) => {}
        }
    }

    fn recolor(&mut self, id: PlaceholderId) -> Result<(), CatalogError> {
        let color = self.palette.next_color();
        self.catalog.set_color(id, color)
    }
}

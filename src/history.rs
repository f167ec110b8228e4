//! Linear undo/redo history of template text
//!
//! Entries are stored oldest first. The offset counts back from the newest
//! entry, so offset 0 is the latest text. Recording an edit while undone
//! discards every entry newer than the current one before appending.

/// Snapshot history with a current position
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    offset: usize,
    /// Set by undo/redo, consumed by the next [`History::record`]
    replaying: bool,
    limit: Option<usize>,
}

impl History {
    /// Create an empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history seeded with an initial text
    pub fn with_initial(text: impl Into<String>) -> Self {
        Self {
            entries: vec![text.into()],
            ..Self::default()
        }
    }

    /// Keep at most `limit` entries, dropping the oldest
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    /// Observe a text change
    ///
    /// A change produced by undo/redo clears the replay flag and is not
    /// recorded; so is text equal to the current entry. Returns whether a
    /// new entry was appended.
    pub fn record(&mut self, text: &str) -> bool {
        if std::mem::take(&mut self.replaying) {
            log::trace!("history: skipping replayed text");
            return false;
        }
        if self.current() == Some(text) {
            return false;
        }

        let keep = self.entries.len() - self.offset;
        if keep < self.entries.len() {
            log::debug!(
                "history: discarding {} undone entries",
                self.entries.len() - keep
            );
            self.entries.truncate(keep);
        }
        self.entries.push(text.to_string());
        self.offset = 0;
        self.enforce_limit();
        log::trace!("history: recorded entry {}", self.entries.len());
        true
    }

    /// Step back to the previous entry
    ///
    /// Returns `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.undo_disabled() {
            return None;
        }
        self.offset += 1;
        self.replaying = true;
        log::debug!("history: undo to offset {}", self.offset);
        self.current()
    }

    /// Step forward to the next entry
    ///
    /// Returns `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if self.redo_disabled() {
            return None;
        }
        self.offset -= 1;
        self.replaying = true;
        log::debug!("history: redo to offset {}", self.offset);
        self.current()
    }

    pub fn undo_disabled(&self) -> bool {
        self.offset + 1 >= self.entries.len()
    }

    pub fn redo_disabled(&self) -> bool {
        self.offset == 0
    }

    /// Text at the current position
    pub fn current(&self) -> Option<&str> {
        let index = self.entries.len().checked_sub(self.offset + 1)?;
        self.entries.get(index).map(String::as_str)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Distance from the newest entry
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the next recorded change will be treated as a replay
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.offset = self.offset.min(self.entries.len().saturating_sub(1));
        }
    }
}

//! Edit session over the log store
//!
//! At most one document is resident at a time. Switching dates is a
//! synchronous save-then-load; there is no discard path. All calls are
//! blocking and expected to run on a single thread.

use crate::error::Result;
use crate::infrastructure::{LoadedLog, LogStore};
use chrono::NaiveDate;

#[derive(Debug)]
struct ActiveLog {
    date: NaiveDate,
    content: String,
    dirty: bool,
}

/// Owns the currently displayed document and its flush lifecycle
#[derive(Debug)]
pub struct EditSession {
    store: LogStore,
    current: Option<ActiveLog>,
}

impl EditSession {
    /// Create an idle session; no document is resident yet
    pub fn new(store: LogStore) -> Self {
        EditSession {
            store,
            current: None,
        }
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Switch to a date: flush the resident document (if any), then load.
    /// On flush failure nothing is switched and the unsaved content stays
    /// resident for retry.
    pub fn open(&mut self, date: NaiveDate) -> Result<LoadedLog> {
        self.flush()?;

        let loaded = self.store.load(date);
        self.current = Some(ActiveLog {
            date,
            content: loaded.content.clone(),
            dirty: false,
        });

        Ok(loaded)
    }

    /// Replace the resident document's content, marking it dirty.
    /// No effect while idle.
    pub fn set_content(&mut self, text: String) {
        if let Some(active) = &mut self.current {
            active.content = text;
            active.dirty = true;
        }
    }

    /// Save the resident document whether dirty or not, mirroring the
    /// periodic autosave. Returns the date saved, or None while idle.
    /// On failure the content stays resident for the next attempt.
    pub fn flush(&mut self) -> Result<Option<NaiveDate>> {
        let Some(active) = &mut self.current else {
            return Ok(None);
        };

        self.store.save(active.date, &active.content)?;
        active.dirty = false;
        Ok(Some(active.date))
    }

    /// Final flush on shutdown
    pub fn close(mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current.as_ref().map(|a| a.date)
    }

    pub fn content(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.content.as_str())
    }

    pub fn is_dirty(&self) -> bool {
        self.current.as_ref().is_some_and(|a| a.dirty)
    }
}

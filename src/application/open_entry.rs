//! Open log entry use case

use crate::application::EditSession;
use crate::domain::DateRef;
use crate::error::Result;
use crate::infrastructure::{EditorSession, LogStore};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Outcome of opening an entry
#[derive(Debug)]
pub struct OpenedEntry {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// True when the document did not exist and was created from template
    pub created: bool,
}

/// Service for opening a date's log file
pub struct OpenEntryService {
    store: LogStore,
}

impl OpenEntryService {
    pub fn new(store: LogStore) -> Self {
        OpenEntryService { store }
    }

    /// Resolve a date reference, load (creating from template on first
    /// access), persist, and optionally launch the editor on the file.
    pub fn execute(&self, date_ref_str: &str, open_in_editor: bool) -> Result<OpenedEntry> {
        let date_ref = DateRef::parse(date_ref_str)?;
        let date = date_ref.resolve(Local::now().date_naive());

        let mut session = EditSession::new(self.store.clone());
        let loaded = session.open(date)?;
        // The editor needs a file on disk, so the template is persisted here.
        session.close()?;

        let path = self.store.path_for(date);

        if open_in_editor {
            EditorSession::from_env().open(&path)?;
        }

        Ok(OpenedEntry {
            date,
            path,
            created: loaded.is_new,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn service() -> (TempDir, OpenEntryService) {
        let temp = TempDir::new().unwrap();
        let store = LogStore::new(temp.path().to_path_buf());
        (temp, OpenEntryService::new(store))
    }

    #[test]
    fn test_open_specific_date_creates_template_file() {
        let (temp, service) = service();

        let opened = service.execute("05-03-2024", false).unwrap();

        assert!(opened.created);
        assert_eq!(
            opened.path,
            temp.path().join("March 2024").join("05-03-2024.txt")
        );

        let content = fs::read_to_string(&opened.path).unwrap();
        assert_eq!(content, "# Research Log - Tuesday, 05 March 2024\n\n");
    }

    #[test]
    fn test_open_existing_does_not_overwrite() {
        let (_temp, service) = service();

        let first = service.execute("05-03-2024", false).unwrap();
        fs::write(&first.path, "my notes").unwrap();

        let second = service.execute("05-03-2024", false).unwrap();
        assert!(!second.created);
        assert_eq!(fs::read_to_string(&second.path).unwrap(), "my notes");
    }

    #[test]
    fn test_open_today_resolves() {
        let (_temp, service) = service();

        let opened = service.execute("today", false).unwrap();
        assert_eq!(opened.date, Local::now().date_naive());
        assert!(opened.path.exists());
    }

    #[test]
    fn test_open_invalid_ref_fails() {
        let (_temp, service) = service();
        assert!(service.execute("someday", false).is_err());
    }
}

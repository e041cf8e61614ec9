//! Date-keyed log document store
//!
//! Every log document lives at `<root>/<MonthName Year>/<DD-MM-YYYY>.txt`.
//! The path is a pure function of the date; month folders are created on
//! demand and never deleted.

use crate::domain::template::load_template;
use crate::error::{Result, RlogError};
use chrono::NaiveDate;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An existing log document found under the store root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: NaiveDate,
    /// Path relative to the store root, e.g. "March 2024/05-03-2024.txt"
    pub filename: String,
}

/// Result of loading a date's document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLog {
    pub content: String,
    /// True when no file existed and the content is the default template
    pub is_new: bool,
}

/// Filesystem store mapping calendar dates to plain-text documents
#[derive(Debug, Clone)]
pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    /// Create a store over the given root directory
    pub fn new(root: PathBuf) -> Self {
        LogStore { root }
    }

    /// Locate the store root: RLOG_ROOT environment variable if set,
    /// otherwise `<Documents>/Research Logs`. Creates the root if missing.
    pub fn discover() -> Result<Self> {
        let root = match std::env::var_os("RLOG_ROOT") {
            Some(dir) => PathBuf::from(dir),
            None => default_root()?,
        };

        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| RlogError::DirectoryCreate {
                path: root.clone(),
                source: e,
            })?;
        }

        Ok(LogStore::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Month folder for a date, e.g. "<root>/March 2024"
    pub fn month_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format("%B %Y").to_string())
    }

    /// Document path for a date, e.g. "<root>/March 2024/05-03-2024.txt"
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.month_dir(date)
            .join(format!("{}.txt", date.format("%d-%m-%Y")))
    }

    /// Whether a document already exists for this date. Side-effect free.
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    /// Load the document for a date, or the default template when none
    /// exists yet. Never fails: read errors degrade to the template with a
    /// warning, so a corrupt file cannot take the session down.
    pub fn load(&self, date: NaiveDate) -> LoadedLog {
        if let Err(e) = self.ensure_month_dir(date) {
            warn!("{}", e);
        }

        let path = self.path_for(date);
        if path.is_file() {
            match fs::read_to_string(&path) {
                Ok(content) => {
                    return LoadedLog {
                        content,
                        is_new: false,
                    }
                }
                Err(e) => {
                    warn!("Failed to read {}: {}; starting from template", path.display(), e);
                }
            }
        }

        LoadedLog {
            content: self.render_template(date),
            is_new: true,
        }
    }

    /// Write the document for a date verbatim. Last writer wins.
    pub fn save(&self, date: NaiveDate, content: &str) -> Result<()> {
        self.ensure_month_dir(date)?;

        let path = self.path_for(date);
        fs::write(&path, content).map_err(|e| RlogError::Write { path, source: e })
    }

    /// Parse a document leaf name back to its date.
    /// Returns None for anything that is not `DD-MM-YYYY.txt`.
    pub fn date_from_filename(filename: &str) -> Option<NaiveDate> {
        let stem = filename.strip_suffix(".txt")?;
        NaiveDate::parse_from_str(stem, "%d-%m-%Y").ok()
    }

    /// List existing documents, newest first, with optional date range and
    /// limit. Files that do not match the naming scheme are ignored.
    pub fn entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntry>> {
        let mut entries = Vec::new();

        // Month folders sit directly under the root; documents one level down.
        let walker = WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(leaf) = entry.file_name().to_str() else {
                continue;
            };
            let Some(date) = Self::date_from_filename(leaf) else {
                continue;
            };
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let filename = rel
                .iter()
                .filter_map(|part| part.to_str())
                .collect::<Vec<_>>()
                .join("/");
            entries.push(LogEntry { date, filename });
        }

        if let Some(from_date) = from {
            entries.retain(|e| e.date >= from_date);
        }
        if let Some(to_date) = to {
            entries.retain(|e| e.date <= to_date);
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(n) = limit {
            entries.truncate(n);
        }

        Ok(entries)
    }

    fn ensure_month_dir(&self, date: NaiveDate) -> Result<()> {
        let dir = self.month_dir(date);
        fs::create_dir_all(&dir).map_err(|e| RlogError::DirectoryCreate {
            path: dir,
            source: e,
        })
    }

    fn render_template(&self, date: NaiveDate) -> String {
        match load_template(&self.root) {
            Ok(template) => template.render(date),
            Err(e) => {
                warn!("Failed to load custom template: {}; using built-in", e);
                crate::domain::Template::builtin().render(date)
            }
        }
    }
}

fn default_root() -> Result<PathBuf> {
    let documents = dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
        .ok_or_else(|| {
            RlogError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine a Documents directory; set RLOG_ROOT",
            ))
        })?;

    Ok(documents.join("Research Logs"))
}

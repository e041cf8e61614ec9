//! Persisted application settings

use crate::error::{Result, RlogError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Settings record stored at `<root>/settings.toml`.
/// Lifecycle is independent from log documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { dark_mode: true }
    }
}

impl Settings {
    fn path(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE)
    }

    /// Load settings from the store root. A missing file yields the
    /// defaults; an unparseable file yields the defaults with a warning.
    /// Never fails.
    pub fn load(root: &Path) -> Self {
        let path = Self::path(root);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                warn!("Failed to read {}: {}; using defaults", path.display(), e);
                return Settings::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "{}",
                    RlogError::SettingsParse(format!("{}: {}", path.display(), e))
                );
                Settings::default()
            }
        }
    }

    /// Save settings to the store root, creating the root if missing.
    pub fn save(&self, root: &Path) -> Result<()> {
        if !root.exists() {
            fs::create_dir_all(root).map_err(|e| RlogError::DirectoryCreate {
                path: root.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        let path = Self::path(root);
        fs::write(&path, contents).map_err(|e| RlogError::Write { path, source: e })
    }
}

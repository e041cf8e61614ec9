//! Settings management use case

use crate::error::{Result, RlogError};
use crate::infrastructure::{LogStore, Settings};

/// Service for reading and writing the settings record
pub struct SettingsService {
    store: LogStore,
}

impl SettingsService {
    pub fn new(store: LogStore) -> Self {
        SettingsService { store }
    }

    /// Get a single settings value
    pub fn get(&self, key: &str) -> Result<String> {
        let settings = Settings::load(self.store.root());

        match key {
            "dark_mode" => Ok(settings.dark_mode.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a settings value and persist immediately
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = Settings::load(self.store.root());

        match key {
            "dark_mode" => {
                settings.dark_mode = parse_bool(value)?;
            }
            _ => return Err(unknown_key(key)),
        }

        settings.save(self.store.root())
    }

    /// Flip dark mode and persist; returns the new value
    pub fn toggle_dark_mode(&self) -> Result<bool> {
        let mut settings = Settings::load(self.store.root());
        settings.dark_mode = !settings.dark_mode;
        settings.save(self.store.root())?;
        Ok(settings.dark_mode)
    }

    /// All settings values
    pub fn list(&self) -> Settings {
        Settings::load(self.store.root())
    }
}

fn unknown_key(key: &str) -> RlogError {
    RlogError::SettingsParse(format!(
        "Unknown settings key: '{}'. Valid keys are: dark_mode",
        key
    ))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        _ => Err(RlogError::SettingsParse(format!(
            "Expected 'true' or 'false', got '{}'",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, SettingsService) {
        let temp = TempDir::new().unwrap();
        let store = LogStore::new(temp.path().to_path_buf());
        (temp, SettingsService::new(store))
    }

    #[test]
    fn test_get_default_dark_mode() {
        let (_temp, service) = service();
        assert_eq!(service.get("dark_mode").unwrap(), "true");
    }

    #[test]
    fn test_set_and_get() {
        let (_temp, service) = service();

        service.set("dark_mode", "false").unwrap();
        assert_eq!(service.get("dark_mode").unwrap(), "false");
    }

    #[test]
    fn test_set_accepts_on_off() {
        let (_temp, service) = service();

        service.set("dark_mode", "off").unwrap();
        assert_eq!(service.get("dark_mode").unwrap(), "false");

        service.set("dark_mode", "on").unwrap();
        assert_eq!(service.get("dark_mode").unwrap(), "true");
    }

    #[test]
    fn test_toggle_round_trip() {
        let (_temp, service) = service();

        assert!(!service.toggle_dark_mode().unwrap());
        assert!(service.toggle_dark_mode().unwrap());
    }

    #[test]
    fn test_toggle_persists() {
        let (temp, service) = service();

        service.toggle_dark_mode().unwrap();
        let reloaded = Settings::load(temp.path());
        assert!(!reloaded.dark_mode);
    }

    #[test]
    fn test_unknown_key_fails() {
        let (_temp, service) = service();
        assert!(service.get("theme").is_err());
        assert!(service.set("theme", "dark").is_err());
    }

    #[test]
    fn test_bad_value_fails() {
        let (_temp, service) = service();
        assert!(service.set("dark_mode", "maybe").is_err());
    }
}

//! Application layer - Use cases and session orchestration

pub mod autosave;
pub mod list_entries;
pub mod manage_settings;
pub mod open_entry;
pub mod session;
pub mod show_month;

pub use autosave::{AutosaveTimer, DEFAULT_AUTOSAVE_INTERVAL};
pub use list_entries::ListEntriesService;
pub use manage_settings::SettingsService;
pub use open_entry::{OpenEntryService, OpenedEntry};
pub use session::EditSession;
pub use show_month::ShowMonthService;

//! Infrastructure layer - Filesystem persistence and external processes

pub mod editor;
pub mod settings;
pub mod store;

pub use editor::EditorSession;
pub use settings::Settings;
pub use store::{LoadedLog, LogEntry, LogStore};

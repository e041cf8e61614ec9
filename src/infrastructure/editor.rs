//! External editor launch for log files

use crate::error::{Result, RlogError};
use std::path::Path;
use std::process::Command;

/// Launches the user's editor on a log file
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Build a session from EDITOR/VISUAL, falling back to a platform default
    pub fn from_env() -> Self {
        let command = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| default_editor().to_string());
        EditorSession { command }
    }

    pub fn new(command: String) -> Self {
        EditorSession { command }
    }

    /// Open a file in the editor and return immediately
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.split_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, go through cmd so .bat and .cmd editors are found
        #[cfg(windows)]
        let spawned = Command::new("cmd").arg("/C").arg(&program).args(&args).spawn();

        #[cfg(not(windows))]
        let spawned = Command::new(&program).args(&args).spawn();

        spawned.map_err(|e| {
            RlogError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        Ok(())
    }

    fn split_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None => (default_editor().to_string(), vec![]),
        }
    }
}

fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "nano"
    }
}

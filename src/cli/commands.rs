//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rlog")]
#[command(about = "Research log manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date reference (e.g., today, yesterday, friday, 05-03-2024)
    #[arg(value_name = "DATE_REF")]
    pub date_ref: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open (creating if needed) the log for a date
    Open {
        /// Date reference (default: today)
        #[arg(default_value = "today")]
        date_ref: String,

        /// Print the file path instead of launching the editor
        #[arg(short, long)]
        print: bool,
    },

    /// Show a month calendar marking logged days
    Cal {
        /// Month to show as YYYY-MM (default: current month)
        month: Option<String>,
    },

    /// List existing log entries, newest first
    List {
        /// Earliest date to include
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print the file path for a date without touching the store
    Path {
        /// Date reference
        date_ref: String,
    },

    /// View or modify settings
    Config {
        /// Settings key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all settings
        #[arg(short, long)]
        list: bool,
    },

    /// Print the store root directory
    Root,
}

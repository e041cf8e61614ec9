//! List existing log entries use case

use crate::domain::DateRef;
use crate::error::Result;
use crate::infrastructure::{LogEntry, LogStore};
use chrono::NaiveDate;

/// Service listing the documents already on disk
pub struct ListEntriesService {
    store: LogStore,
}

impl ListEntriesService {
    pub fn new(store: LogStore) -> Self {
        ListEntriesService { store }
    }

    /// List entries, newest first. `from`/`to` accept the same date formats
    /// as date references on the command line.
    pub fn execute(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntry>> {
        let from = from.map(parse_bound).transpose()?;
        let to = to.map(parse_bound).transpose()?;
        self.store.entries(from, to, limit)
    }
}

fn parse_bound(s: &str) -> Result<NaiveDate> {
    match DateRef::parse(s)? {
        DateRef::Date(date) => Ok(date),
        // Relative refs (today, friday, ...) resolve against the clock.
        date_ref => {
            let today = chrono::Local::now().date_naive();
            Ok(date_ref.resolve(today))
        }
    }
}

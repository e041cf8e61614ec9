//! Calendar month view use case

use crate::domain::MonthGrid;
use crate::error::{Result, RlogError};
use crate::infrastructure::LogStore;
use chrono::Datelike;

/// Service producing the month grid with logged days marked
pub struct ShowMonthService {
    store: LogStore,
}

impl ShowMonthService {
    pub fn new(store: LogStore) -> Self {
        ShowMonthService { store }
    }

    /// Grid for an explicit "YYYY-MM" month, or the current month when None
    pub fn execute(&self, month_str: Option<&str>) -> Result<MonthGrid> {
        let (year, month) = match month_str {
            Some(s) => parse_month(s)?,
            None => {
                let today = chrono::Local::now().date_naive();
                (today.year(), today.month())
            }
        };

        MonthGrid::build(year, month, |date| self.store.exists(date))
    }
}

/// Parse "YYYY-MM" into (year, month)
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let invalid = || RlogError::InvalidMonth(s.to_string());

    let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_parse_month_valid() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
    }

    #[test]
    fn test_parse_month_invalid() {
        assert!(parse_month("2024").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024-00").is_err());
        assert!(parse_month("march 2024").is_err());
    }

    #[test]
    fn test_grid_marks_logged_days() {
        let temp = TempDir::new().unwrap();
        let store = LogStore::new(temp.path().to_path_buf());
        store
            .save(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), "hello")
            .unwrap();

        let service = ShowMonthService::new(store);
        let grid = service.execute(Some("2024-03")).unwrap();

        let marked: Vec<u32> = grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.has_document)
            .map(|c| c.day)
            .collect();

        assert_eq!(marked, vec![5]);
    }

    #[test]
    fn test_default_is_current_month() {
        let temp = TempDir::new().unwrap();
        let store = LogStore::new(temp.path().to_path_buf());

        let service = ShowMonthService::new(store);
        let grid = service.execute(None).unwrap();

        let today = chrono::Local::now().date_naive();
        assert_eq!(grid.year, today.year());
        assert_eq!(grid.month, today.month());
    }
}

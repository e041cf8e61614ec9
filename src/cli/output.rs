//! Output formatting utilities

use crate::domain::MonthGrid;
use crate::infrastructure::LogEntry;
use chrono::NaiveDate;

/// Format a list of log entries for display
pub fn format_entry_list(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No logs found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}\n",
            entry.date.format("%d-%m-%Y"),
            entry.filename
        ));
    }
    output
}

/// Render a month grid as text. Logged days carry a `*`, today is
/// bracketed, out-of-month cells are blank.
pub fn render_month_grid(grid: &MonthGrid, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(format!("{:^28}", grid.label()).trim_end());
    output.push('\n');
    output.push_str("  Mo  Tu  We  Th  Fr  Sa  Su\n");

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                Some(cell) if cell.date == today => {
                    line.push_str(&format!("[{:>2}]", cell.day));
                }
                Some(cell) if cell.has_document => {
                    line.push_str(&format!(" {:>2}*", cell.day));
                }
                Some(cell) => {
                    line.push_str(&format!(" {:>2} ", cell.day));
                }
                None => line.push_str("    "),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Status line after a successful save, timestamped like the original
/// status bar
pub fn saved_message(time: chrono::DateTime<chrono::Local>) -> String {
    format!("Saved: {}", time.format("%H:%M:%S"))
}

/// Status line after loading a date's log
pub fn loaded_message(date: NaiveDate, created: bool) -> String {
    if created {
        format!("Created log for {}", date.format("%d %B %Y"))
    } else {
        format!("Loaded log for {}", date.format("%d %B %Y"))
    }
}

/// Timestamped error line for recoverable failures
pub fn error_message(time: chrono::DateTime<chrono::Local>, message: &str) -> String {
    format!("[{}] Error: {}", time.format("%H:%M:%S"), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No logs found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            LogEntry {
                date: date(2024, 3, 5),
                filename: "March 2024/05-03-2024.txt".to_string(),
            },
            LogEntry {
                date: date(2024, 3, 1),
                filename: "March 2024/01-03-2024.txt".to_string(),
            },
        ];

        let output = format_entry_list(&entries);
        assert!(output.contains("05-03-2024  March 2024/05-03-2024.txt"));
        assert!(output.contains("01-03-2024  March 2024/01-03-2024.txt"));
    }

    #[test]
    fn test_render_grid_header_and_label() {
        let grid = MonthGrid::build(2024, 3, |_| false).unwrap();
        let output = render_month_grid(&grid, date(2020, 1, 1));

        assert!(output.contains("March 2024"));
        assert!(output.contains("Mo  Tu  We  Th  Fr  Sa  Su"));
    }

    #[test]
    fn test_render_grid_marks_logged_day() {
        let logged = date(2024, 3, 5);
        let grid = MonthGrid::build(2024, 3, |d| d == logged).unwrap();
        let output = render_month_grid(&grid, date(2020, 1, 1));

        assert!(output.contains(" 5*"));
        // Unlogged days carry no marker
        assert!(output.contains(" 6 "));
    }

    #[test]
    fn test_render_grid_brackets_today() {
        let grid = MonthGrid::build(2024, 3, |_| false).unwrap();
        let output = render_month_grid(&grid, date(2024, 3, 17));

        assert!(output.contains("[17]"));
    }

    #[test]
    fn test_render_grid_every_day_present() {
        let grid = MonthGrid::build(2024, 2, |_| false).unwrap();
        let output = render_month_grid(&grid, date(2020, 1, 1));

        for day in [1, 10, 29] {
            assert!(output.contains(&day.to_string()));
        }
    }

    #[test]
    fn test_saved_message() {
        let t = chrono::Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 9).unwrap();
        assert_eq!(saved_message(t), "Saved: 14:30:09");
    }

    #[test]
    fn test_loaded_and_created_messages() {
        assert_eq!(
            loaded_message(date(2024, 3, 5), false),
            "Loaded log for 05 March 2024"
        );
        assert_eq!(
            loaded_message(date(2024, 3, 5), true),
            "Created log for 05 March 2024"
        );
    }

    #[test]
    fn test_error_message_timestamped() {
        let t = chrono::Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 9).unwrap();
        assert_eq!(
            error_message(t, "disk full"),
            "[14:30:09] Error: disk full"
        );
    }
}

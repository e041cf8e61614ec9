//! Month grid construction for the calendar view

use crate::error::{Result, RlogError};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// One in-month day in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub has_document: bool,
}

/// A Monday-first month grid; out-of-month positions are None
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    /// Build the grid for a month, marking each day with `has_document`.
    pub fn build<F>(year: i32, month: u32, has_document: F) -> Result<Self>
    where
        F: Fn(NaiveDate) -> bool,
    {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| RlogError::InvalidMonth(format!("{}-{:02}", year, month)))?;

        let offset = first.weekday().num_days_from_monday() as i64;
        let mut cursor = first - Duration::days(offset);

        let mut weeks = Vec::new();
        loop {
            let mut week: [Option<DayCell>; 7] = [None; 7];
            let mut any_in_month = false;

            for cell in week.iter_mut() {
                if cursor.year() == year && cursor.month() == month {
                    *cell = Some(DayCell {
                        date: cursor,
                        day: cursor.day(),
                        has_document: has_document(cursor),
                    });
                    any_in_month = true;
                }
                cursor = cursor + Duration::days(1);
            }

            if !any_in_month {
                break;
            }
            weeks.push(week);

            if cursor.month() != month || cursor.year() != year {
                break;
            }
        }

        Ok(MonthGrid { year, month, weeks })
    }

    /// Label like "March 2024"
    pub fn label(&self) -> String {
        first_of_month_unchecked(self.year, self.month)
            .format("%B %Y")
            .to_string()
    }
}

fn first_of_month_unchecked(year: i32, month: u32) -> NaiveDate {
    // Only called with a year/month pair that already built a grid.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the next calendar month
pub fn next_month(first: NaiveDate) -> NaiveDate {
    first_of_month(first)
        .checked_add_months(Months::new(1))
        .unwrap_or(first)
}

/// First day of the previous calendar month
pub fn prev_month(first: NaiveDate) -> NaiveDate {
    first_of_month(first)
        .checked_sub_months(Months::new(1))
        .unwrap_or(first)
}

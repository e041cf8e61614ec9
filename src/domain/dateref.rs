//! Date reference parsing and resolution

use crate::error::{Result, RlogError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date reference given on the command line, resolved against today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Most recent occurrence of a weekday (today counts)
    Weekday(Weekday),
    /// Specific date
    Date(NaiveDate),
}

impl DateRef {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            "tomorrow" => Ok(DateRef::Tomorrow),
            _ => {
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(DateRef::Weekday(weekday));
                }

                // DD-MM-YYYY matches the stored filename format; accept ISO too.
                NaiveDate::parse_from_str(&normalized, "%d-%m-%Y")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d"))
                    .map(DateRef::Date)
                    .map_err(|_| RlogError::InvalidDateRef(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateRef::Today => base_date,
            DateRef::Yesterday => base_date - Duration::days(1),
            DateRef::Tomorrow => base_date + Duration::days(1),
            DateRef::Weekday(target) => {
                let days_back = (base_date.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                base_date - Duration::days(days_back as i64)
            }
            DateRef::Date(date) => *date,
        }
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

//! Domain layer - Pure date and document logic

pub mod calendar;
pub mod dateref;
pub mod template;

pub use calendar::{DayCell, MonthGrid};
pub use dateref::DateRef;
pub use template::Template;

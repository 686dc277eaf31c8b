//! Headless date-range selection.
//!
//! The crate decides what "start", "end", "in range", "hovered" and "focused" mean for
//! a two-click calendar range picker, and does the calendar arithmetic that keyboard
//! navigation and month grids depend on. Rendering is left entirely to the host: it
//! reads [`MonthGrid`] cells, asks [`DateRangePicker::cell_state`] how to draw each one,
//! and forwards clicks, hovers and key presses back in.
//!
//! ```
//! use date_range_picker::{CalendarDate, DateRangePicker, PickerConfig};
//!
//! let date = |s: &str| s.parse::<CalendarDate>().unwrap();
//! let mut picker = DateRangePicker::new(PickerConfig::default(), date("2024-06-15")).unwrap();
//!
//! picker.select_date(date("2024-06-18"));
//! picker.select_date(date("2024-06-25"));
//!
//! assert!(picker.is_in_range(date("2024-06-22")));
//! assert_eq!(picker.display_text(), "2024-06-18 - 2024-06-25");
//! ```

mod cell;
mod consts;
mod grid;
mod hover;
mod keyboard;
mod month;
mod picker;
mod policy;
mod prelude;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use cell::{CellState, CellVisual};
pub use consts::*;
pub use grid::{MonthGrid, generate_grid};
pub use hover::HoverState;
pub use keyboard::{Key, KeyboardNavigator, NavigatorAction};
pub use month::{MonthCursor, YearMonth};
pub use picker::{ConfigError, DateRangePicker, PickerConfig, RangeChange};
pub use policy::DisabledPolicy;
pub use range::{DateRange, RangeError};
pub use selection::{Phase, Selection};
pub use types::{Day, Month, Weekday, Year, day_of_week, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar day with no time-of-day component.
///
/// Ordering is chronological: fields are compared year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// (year, month, day) as plain integers
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// The month this date falls in
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    pub const fn weekday(&self) -> Weekday {
        day_of_week(self.year(), self.month(), self.day())
    }

    /// The following calendar day, rolling over month and year ends.
    /// Returns `None` past 9999-12-31.
    pub fn next_day(self) -> Option<Self> {
        let (year, month, day) = self.to_tuple();
        if day < days_in_month(year, month) {
            return Self::new(year, month, day + 1).ok();
        }
        self.year_month().checked_add_months(1).map(YearMonth::first_day)
    }

    /// The preceding calendar day. Returns `None` before 0001-01-01.
    pub fn prev_day(self) -> Option<Self> {
        let (year, month, day) = self.to_tuple();
        if day > MIN_DAY {
            return Self::new(year, month, day - 1).ok();
        }
        self.year_month().checked_add_months(-1).map(YearMonth::last_day)
    }

    /// Days elapsed since 0001-01-01, which is day 0
    pub fn day_number(&self) -> u32 {
        let years_before = u32::from(self.year()) - 1;
        let days_before_year = years_before * 365 + years_before / 4 - years_before / 100 + years_before / 400;
        let days_before_month: u32 = (1..self.month())
            .map(|month| u32::from(days_in_month(self.year(), month)))
            .sum();
        days_before_year + days_before_month + u32::from(self.day()) - 1
    }

    /// Shifts by a signed number of calendar days.
    /// Returns `None` if any step would leave the supported year range.
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        let mut date = self;
        for _ in 0..days.unsigned_abs() {
            date = if days > 0 { date.next_day()? } else { date.prev_day()? };
        }
        Some(date)
    }
}

/// Calendar-day equality that treats a missing side as "not the same day".
pub fn is_same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        Self::new(parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

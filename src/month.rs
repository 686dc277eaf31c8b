use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Day, MONTHS_PER_YEAR, Month, ParseError, Weekday, Year, days_in_month, prelude::*};

/// A calendar month of a specific year, used as the anchor of a displayed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` for out-of-range parts.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub const fn first_day(self) -> CalendarDate {
        CalendarDate {
            year:  self.year,
            month: self.month,
            day:   Day::FIRST,
        }
    }

    pub const fn last_day(self) -> CalendarDate {
        CalendarDate {
            year:  self.year,
            month: self.month,
            day:   Day::last_of_month(self.year, self.month),
        }
    }

    /// The given day of this month, or `None` if the month is shorter
    pub fn day(self, day: u8) -> Option<CalendarDate> {
        CalendarDate::new(self.year(), self.month(), day).ok()
    }

    /// Weekday of the 1st, which fixes the number of leading blanks in the grid
    pub const fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year_month() == *self
    }

    /// Header title such as "June 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.month.name(), self.year())
    }

    /// Shifts by whole months, carrying into the year.
    /// Returns `None` outside years 1..=9999.
    pub fn checked_add_months(self, months: i32) -> Option<Self> {
        let index = (i32::from(self.year()) * MONTHS_PER_YEAR + i32::from(self.month()) - 1)
            .checked_add(months)?;
        let year = u16::try_from(index.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month = u8::try_from(index.rem_euclid(MONTHS_PER_YEAR) + 1).ok()?;
        Self::new(year, month).ok()
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

/// Tracks which month(s) a picker currently shows.
///
/// With two months shown the second is always the month after the anchor, so both
/// panes move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    anchor: YearMonth,
    double: bool,
}

impl MonthCursor {
    pub const fn single(anchor: YearMonth) -> Self {
        Self {
            anchor,
            double: false,
        }
    }

    pub const fn double(anchor: YearMonth) -> Self {
        Self { anchor, double: true }
    }

    pub const fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub const fn months_shown(&self) -> u8 {
        if self.double { 2 } else { 1 }
    }

    /// The month rendered beside the anchor, if two are shown
    pub fn second(&self) -> Option<YearMonth> {
        if self.double {
            self.anchor.checked_add_months(1)
        } else {
            None
        }
    }

    pub fn displayed_months(&self) -> Vec<YearMonth> {
        std::iter::once(self.anchor).chain(self.second()).collect()
    }

    pub fn is_displayed(&self, date: CalendarDate) -> bool {
        self.displayed_months().iter().any(|m| m.contains(date))
    }

    /// Moves the anchor by `direction` months. Returns `false`, leaving the cursor
    /// untouched, when the target month is outside the supported years.
    pub fn navigate_month(&mut self, direction: i32) -> bool {
        match self.anchor.checked_add_months(direction) {
            Some(anchor) => {
                log::debug!("month cursor {} -> {anchor}", self.anchor);
                self.anchor = anchor;
                true
            },
            None => {
                log::trace!("month cursor at {} cannot move by {direction}", self.anchor);
                false
            },
        }
    }
}

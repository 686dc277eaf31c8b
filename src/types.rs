use crate::consts::{
    CENTURY_CYCLE, DAY_NAMES, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .filter(|_| value <= MAX_YEAR)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month number in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|_| value <= MAX_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position within the year (January is 0)
    #[inline]
    pub const fn index0(self) -> usize {
        (self.get() - 1) as usize
    }

    /// English name, e.g. "March"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index0()]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day-of-month that has been checked against its year and month.
///
/// The type itself only carries the number; validity for a particular month is
/// established by [`Day::new`], which is the only public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Day(NonZeroU8);

impl Day {
    /// The 1st, valid in every month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// The last day of `year`-`month`
    pub const fn last_of_month(year: Year, month: Month) -> Self {
        match NonZeroU8::new(days_in_month(year.get(), month.get())) {
            Some(day) => Self(day),
            None => Self::FIRST,
        }
    }

    /// Creates a new Day, validating it against the length of `year`-`month`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month,
    /// and `ParseError::InvalidMonth` if `month` itself is out of range.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let month_checked = Month::new(month)?;
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month_checked.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// Day of the week, numbered the way calendar grids lay out columns: Sunday is 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Column index, 0 (Sunday) through 6 (Saturday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Wraps modulo 7, so any integer maps to a weekday
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    /// Two-letter column header ("Su", "Mo", ...)
    pub const fn short_name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Sakamoto's method. Valid for every Gregorian date with `year >= 1`.
#[allow(clippy::cast_possible_truncation)]
pub const fn day_of_week(year: u16, month: u8, day: u8) -> Weekday {
    const MONTH_OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let y = if month < 3 { year - 1 } else { year };
    let sum = y + y / LEAP_YEAR_CYCLE - y / CENTURY_CYCLE
        + y / GREGORIAN_CYCLE
        + MONTH_OFFSETS[(month - 1) as usize]
        + day as u16;
    let index = (sum % DAYS_PER_WEEK as u16) as u8;
    Weekday::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_serde_as_number() {
        let year = Year::new(2024).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "2024");
        let parsed: Year = serde_json::from_str("2024").unwrap();
        assert_eq!(parsed, year);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_bounds_and_names() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(12).unwrap().name(), "December");
        assert_eq!(Month::new(6).unwrap().index0(), 5);
        assert_eq!(Month::new(6).unwrap().to_string(), "6");
    }

    #[test]
    fn test_day_validated_against_month_length() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 0,
                year: 2024
            })
        ));
        assert!(matches!(Day::new(1, 2024, 13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        struct TestCase {
            date:     (u16, u8, u8),
            expected: Weekday,
        }

        let cases = [
            TestCase {
                date:     (2024, 6, 1),
                expected: Weekday::Saturday,
            },
            TestCase {
                date:     (2023, 11, 1),
                expected: Weekday::Wednesday,
            },
            TestCase {
                date:     (2024, 2, 29),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (2000, 1, 1),
                expected: Weekday::Saturday,
            },
            TestCase {
                date:     (1970, 1, 1),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (1, 1, 1),
                expected: Weekday::Monday,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(day_of_week(y, m, d), case.expected, "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday_index_and_headers() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
        assert_eq!(Weekday::from_index(9), Weekday::Tuesday);
        assert_eq!(Weekday::Wednesday.short_name(), "We");
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }
}

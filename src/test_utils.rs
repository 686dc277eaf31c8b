use crate::{CalendarDate, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn year_month(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).expect("test month should be valid")
}

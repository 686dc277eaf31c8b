use crate::CalendarDate;

/// Decides which days cannot be selected.
///
/// `today` is passed in rather than read from the clock, which keeps every query
/// deterministic. Days before `today` are disabled unless past dates are allowed;
/// optional inclusive bounds disable everything outside them either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledPolicy {
    today:            CalendarDate,
    allow_past_dates: bool,
    min_date:         Option<CalendarDate>,
    max_date:         Option<CalendarDate>,
}

impl DisabledPolicy {
    pub const fn new(today: CalendarDate) -> Self {
        Self {
            today,
            allow_past_dates: false,
            min_date: None,
            max_date: None,
        }
    }

    #[must_use]
    pub const fn allow_past_dates(mut self, allow: bool) -> Self {
        self.allow_past_dates = allow;
        self
    }

    #[must_use]
    pub const fn with_min_date(mut self, min_date: Option<CalendarDate>) -> Self {
        self.min_date = min_date;
        self
    }

    #[must_use]
    pub const fn with_max_date(mut self, max_date: Option<CalendarDate>) -> Self {
        self.max_date = max_date;
        self
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn allows_past_dates(&self) -> bool {
        self.allow_past_dates
    }

    pub fn is_today(&self, date: CalendarDate) -> bool {
        date == self.today
    }

    /// Strictly before today, regardless of whether past dates are allowed
    pub fn is_past(&self, date: CalendarDate) -> bool {
        date < self.today
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        let before_min = self.min_date.is_some_and(|min| date < min);
        let after_max = self.max_date.is_some_and(|max| date > max);
        (!self.allow_past_dates && self.is_past(date)) || before_min || after_max
    }
}

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateRange, DisabledPolicy, is_same_day, prelude::*};

/// Which endpoint the next click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

impl Phase {
    /// Status line shown above the calendar
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Start => "Select start date",
            Self::End => "Select end date",
        }
    }
}

/// Start/end state of one picker.
///
/// `end` is only ever set together with a `start` that is not after it. Transitions
/// keep that true on their own; nothing is reordered after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
    phase: Phase,
}

impl Selection {
    pub const fn new() -> Self {
        Self {
            start: None,
            end:   None,
            phase: Phase::Start,
        }
    }

    /// Restores previously chosen bounds. The caller has already checked them.
    pub(crate) const fn restore(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self {
            start,
            end,
            phase: Phase::Start,
        }
    }

    /// Returns the first clicked date, if any
    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Returns the end date, set only once the range is complete
    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Which endpoint the next click will set
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The committed range, once both endpoints are set
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end).ok(),
            _ => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// A start is chosen and the end is still open, so hover previews apply
    pub const fn awaiting_end(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub const fn has_selected_dates(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Applies a click on `date`. Returns `true` if start or end changed.
    ///
    /// Disabled dates are ignored. A click while picking the start, or after a
    /// completed range, begins a new range. While picking the end, a date on or after
    /// the start commits the range, and an earlier date replaces the start instead of
    /// becoming the end.
    pub fn select_date(&mut self, date: CalendarDate, policy: &DisabledPolicy) -> bool {
        if policy.is_disabled(date) {
            log::trace!("ignoring click on disabled date {date}");
            return false;
        }

        let before = (self.start, self.end);
        match (self.phase, self.start, self.end) {
            (Phase::Start, ..) | (_, None, _) | (_, _, Some(_)) => {
                self.start = Some(date);
                self.end = None;
                self.phase = Phase::End;
                log::debug!("range start set to {date}");
            },
            (Phase::End, Some(start), None) if date >= start => {
                self.end = Some(date);
                self.phase = Phase::Start;
                log::debug!("range committed {start}/{date}");
            },
            (Phase::End, Some(start), None) => {
                self.start = Some(date);
                log::debug!("{date} precedes start {start}, replacing start");
            },
        }
        before != (self.start, self.end)
    }

    /// Drops both endpoints. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_dates = self.has_selected_dates();
        *self = Self::new();
        if had_dates {
            log::debug!("selection cleared");
        }
        had_dates
    }

    /// Both bounds set and `start <= date <= end`
    pub fn is_in_range(&self, date: CalendarDate) -> bool {
        self.range().is_some_and(|range| range.contains(date))
    }

    pub fn is_start(&self, date: CalendarDate) -> bool {
        is_same_day(Some(date), self.start)
    }

    pub fn is_end(&self, date: CalendarDate) -> bool {
        is_same_day(Some(date), self.end)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, CellState, DEFAULT_MONTHS_SHOWN, DEFAULT_PLACEHOLDER, DateRange, DisabledPolicy,
    HoverState, Key, KeyboardNavigator, MonthCursor, MonthGrid, NavigatorAction, Phase, RangeError,
    Selection, YearMonth,
};

/// Construction options for a [`DateRangePicker`].
///
/// Every field has a default, so a config can be deserialized from a partial
/// document such as `{"allow_past_dates": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// When false, days before today cannot be selected
    pub allow_past_dates: bool,
    /// Any day in the month to show first; defaults to today's month
    pub initial_month:    Option<CalendarDate>,
    /// 1 or 2 side-by-side months
    pub months_shown:     u8,
    /// Inclusive lower bound on selectable days
    pub min_date:         Option<CalendarDate>,
    /// Inclusive upper bound on selectable days
    pub max_date:         Option<CalendarDate>,
    pub initial_start:    Option<CalendarDate>,
    pub initial_end:      Option<CalendarDate>,
    /// Trigger text while nothing is selected
    pub placeholder:      String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allow_past_dates: false,
            initial_month:    None,
            months_shown:     DEFAULT_MONTHS_SHOWN,
            min_date:         None,
            max_date:         None,
            initial_start:    None,
            initial_end:      None,
            placeholder:      DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Error type for rejected picker configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("months_shown must be 1 or 2, got {0}")]
    InvalidMonthsShown(u8),

    #[error("min_date ({min}) is after max_date ({max})")]
    InvertedBounds { min: CalendarDate, max: CalendarDate },

    #[error("initial_end ({0}) is set without an initial_start")]
    EndWithoutStart(CalendarDate),

    #[error(transparent)]
    InitialRange(#[from] RangeError),
}

/// Payload handed to the range listener whenever start or end changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeChange {
    pub start: Option<CalendarDate>,
    pub end:   Option<CalendarDate>,
}

impl RangeChange {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start?, self.end?).ok()
    }
}

type RangeListener = Box<dyn FnMut(&RangeChange)>;

/// One date-range picker instance.
///
/// Owns the selection, hover, keyboard focus and displayed months, and reports
/// start/end changes to an optional listener. All methods run synchronously on the
/// caller's thread; nothing here is shared between instances.
pub struct DateRangePicker {
    selection:          Selection,
    hover:              HoverState,
    navigator:          KeyboardNavigator,
    cursor:             MonthCursor,
    policy:             DisabledPolicy,
    placeholder:        String,
    on_range_committed: Option<RangeListener>,
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("selection", &self.selection)
            .field("hover", &self.hover)
            .field("navigator", &self.navigator)
            .field("cursor", &self.cursor)
            .field("policy", &self.policy)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl DateRangePicker {
    /// Builds a picker for the day `today`.
    ///
    /// # Errors
    /// Returns `ConfigError` if `months_shown` is not 1 or 2, the min/max bounds are
    /// inverted, or the initial start/end do not form a valid partial range.
    pub fn new(config: PickerConfig, today: CalendarDate) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (config.min_date, config.max_date) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }

        let selection = match (config.initial_start, config.initial_end) {
            (None, Some(end)) => return Err(ConfigError::EndWithoutStart(end)),
            (Some(start), Some(end)) => {
                let range = DateRange::new(start, end)?;
                Selection::restore(Some(range.start()), Some(range.end()))
            },
            (start, None) => Selection::restore(start, None),
        };

        let anchor = config.initial_month.unwrap_or(today).year_month();
        let cursor = match config.months_shown {
            1 => MonthCursor::single(anchor),
            2 => MonthCursor::double(anchor),
            other => return Err(ConfigError::InvalidMonthsShown(other)),
        };

        let policy = DisabledPolicy::new(today)
            .allow_past_dates(config.allow_past_dates)
            .with_min_date(config.min_date)
            .with_max_date(config.max_date);

        log::debug!("picker created: today {today}, anchor {anchor}, {} month(s)", cursor.months_shown());
        Ok(Self {
            selection,
            hover: HoverState::new(),
            navigator: KeyboardNavigator::new(),
            cursor,
            policy,
            placeholder: config.placeholder,
            on_range_committed: None,
        })
    }

    /// Registers the listener called after every start/end change.
    #[must_use]
    pub fn on_range_committed(mut self, listener: impl FnMut(&RangeChange) + 'static) -> Self {
        self.set_on_range_committed(listener);
        self
    }

    pub fn set_on_range_committed(&mut self, listener: impl FnMut(&RangeChange) + 'static) {
        self.on_range_committed = Some(Box::new(listener));
    }

    /// Returns the underlying selection state
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the selected start date, if any
    pub const fn start(&self) -> Option<CalendarDate> {
        self.selection.start()
    }

    /// Returns the selected end date, if any
    pub const fn end(&self) -> Option<CalendarDate> {
        self.selection.end()
    }

    /// Which endpoint the next click will set
    pub const fn phase(&self) -> Phase {
        self.selection.phase()
    }

    /// The committed range, once both endpoints are set
    pub fn range(&self) -> Option<DateRange> {
        self.selection.range()
    }

    /// Returns the day under the pointer, if any
    pub const fn hover_date(&self) -> Option<CalendarDate> {
        self.hover.hover_date()
    }

    /// Returns the keyboard-focused day, if any
    pub const fn focused_date(&self) -> Option<CalendarDate> {
        self.navigator.focused_date()
    }

    /// Returns the first displayed month
    pub const fn anchor_month(&self) -> YearMonth {
        self.cursor.anchor()
    }

    /// Returns every displayed month, in order
    pub fn displayed_months(&self) -> Vec<YearMonth> {
        self.cursor.displayed_months()
    }

    /// Returns the rule deciding which days can be picked
    pub const fn policy(&self) -> &DisabledPolicy {
        &self.policy
    }

    /// Click on a day. `None` and disabled days are ignored.
    /// Returns `true` if start or end changed, in which case the listener ran.
    pub fn select_date(&mut self, date: impl Into<Option<CalendarDate>>) -> bool {
        let Some(date) = date.into() else {
            log::trace!("ignoring selection without a date");
            return false;
        };
        let changed = self.selection.select_date(date, &self.policy);
        if changed {
            self.notify();
        }
        changed
    }

    /// Drops the selection and hover. The listener runs only if a bound was set.
    pub fn clear(&mut self) -> bool {
        self.hover.clear();
        let changed = self.selection.clear();
        if changed {
            self.notify();
        }
        changed
    }

    /// Pointer enter (`Some`) or leave (`None`). Disabled days never become hovered.
    pub fn set_hover_date(&mut self, date: Option<CalendarDate>) -> bool {
        if date.is_some_and(|d| self.policy.is_disabled(d)) {
            return false;
        }
        self.hover.set(date)
    }

    /// Applies a key press. Enter/Space select the focused day.
    pub fn handle_key(&mut self, key: Key) -> NavigatorAction {
        let action = self.navigator.handle_key(key);
        if let NavigatorAction::Commit(date) = action {
            self.select_date(date);
        }
        action
    }

    /// Like [`Self::handle_key`], taking the host's key name. Unknown keys are ignored.
    pub fn handle_key_name(&mut self, name: &str) -> NavigatorAction {
        Key::from_name(name).map_or(NavigatorAction::Ignore, |key| self.handle_key(key))
    }

    /// Places keyboard focus on `date`, or the 1st of the anchor month, unless
    /// something is already focused.
    pub fn initialize_focus(&mut self, date: Option<CalendarDate>) -> bool {
        self.navigator.initialize_focus(date, self.cursor.anchor())
    }

    pub fn navigate_month(&mut self, direction: i32) -> bool {
        self.cursor.navigate_month(direction)
    }

    /// One grid per displayed month
    pub fn grids(&self) -> Vec<MonthGrid> {
        self.cursor.displayed_months().into_iter().map(MonthGrid::new).collect()
    }

    pub fn is_in_range(&self, date: CalendarDate) -> bool {
        self.selection.is_in_range(date)
    }

    pub fn is_hover_preview(&self, date: CalendarDate) -> bool {
        self.hover.is_preview(&self.selection, date)
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.policy.is_disabled(date)
    }

    pub fn cell_state(&self, date: CalendarDate) -> CellState {
        CellState {
            date,
            is_start: self.selection.is_start(date),
            is_end: self.selection.is_end(date),
            in_range: self.is_in_range(date),
            hover_preview: self.is_hover_preview(date),
            is_today: self.policy.is_today(date),
            is_past: self.policy.is_past(date),
            is_disabled: self.is_disabled(date),
            is_focused: self.navigator.is_focused(date),
        }
    }

    /// Trigger text: the placeholder, `"<start> - Select end date"`, or `"<start> - <end>"`.
    pub fn display_text(&self) -> String {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => format!("{start} - {end}"),
            (Some(start), None) => format!("{start} - {}", Phase::End.prompt()),
            _ => self.placeholder.clone(),
        }
    }

    /// Status line for the header
    pub const fn prompt(&self) -> &'static str {
        self.phase().prompt()
    }

    /// Whether an "Apply" action makes sense: a start has been chosen
    pub const fn can_apply(&self) -> bool {
        self.selection.start().is_some()
    }

    pub const fn can_clear(&self) -> bool {
        self.selection.has_selected_dates()
    }

    fn notify(&mut self) {
        let change = RangeChange {
            start: self.start(),
            end:   self.end(),
        };
        log::debug!("range changed: start {:?}, end {:?}", change.start, change.end);
        if let Some(listener) = self.on_range_committed.as_mut() {
            listener(&change);
        }
    }
}

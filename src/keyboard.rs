use crate::{CalendarDate, DAYS_PER_WEEK, YearMonth, prelude::*};

/// Keys the navigator reacts to. Anything else is never constructed and so is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Key {
    #[display(fmt = "ArrowLeft")]
    ArrowLeft,
    #[display(fmt = "ArrowRight")]
    ArrowRight,
    #[display(fmt = "ArrowUp")]
    ArrowUp,
    #[display(fmt = "ArrowDown")]
    ArrowDown,
    #[display(fmt = "Enter")]
    Enter,
    #[display(fmt = "Space")]
    Space,
    #[display(fmt = "Escape")]
    Escape,
}

impl Key {
    /// Maps a host key name (DOM `KeyboardEvent.key` spelling) to a key.
    /// The space bar arrives as `" "`; `"Space"` and `"Spacebar"` are accepted too.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Enter" => Some(Self::Enter),
            " " | "Space" | "Spacebar" => Some(Self::Space),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Signed day offset for arrow keys
    const fn day_delta(self) -> Option<i32> {
        let week = DAYS_PER_WEEK as i32;
        match self {
            Self::ArrowLeft => Some(-1),
            Self::ArrowRight => Some(1),
            Self::ArrowUp => Some(-week),
            Self::ArrowDown => Some(week),
            Self::Enter | Self::Space | Self::Escape => None,
        }
    }
}

/// What a key press means for the focus cursor and the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorAction {
    /// Nothing happens
    Ignore,
    /// Focus moves to this day
    Move(CalendarDate),
    /// Select this day; focus stays where it is
    Commit(CalendarDate),
    /// Focus is dropped until re-initialized
    ClearFocus,
}

/// Keyboard focus cursor, independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardNavigator {
    focused_date: Option<CalendarDate>,
}

impl KeyboardNavigator {
    pub const fn new() -> Self {
        Self { focused_date: None }
    }

    pub const fn focused_date(&self) -> Option<CalendarDate> {
        self.focused_date
    }

    pub fn set_focused_date(&mut self, date: Option<CalendarDate>) {
        self.focused_date = date;
    }

    pub fn is_focused(&self, date: CalendarDate) -> bool {
        self.focused_date == Some(date)
    }

    /// Interprets `key` against `focused` without touching any state.
    ///
    /// Without a focused day every key is ignored. Moves that would leave the
    /// supported years are ignored as well.
    pub fn action_for(key: Key, focused: Option<CalendarDate>) -> NavigatorAction {
        let Some(focused) = focused else {
            return NavigatorAction::Ignore;
        };
        match key {
            Key::Enter | Key::Space => NavigatorAction::Commit(focused),
            Key::Escape => NavigatorAction::ClearFocus,
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => key
                .day_delta()
                .and_then(|delta| focused.checked_add_days(delta))
                .map_or(NavigatorAction::Ignore, NavigatorAction::Move),
        }
    }

    /// Applies `key` to the cursor and returns the action. A `Commit` is left for
    /// the caller to route to the selection.
    pub fn handle_key(&mut self, key: Key) -> NavigatorAction {
        let action = Self::action_for(key, self.focused_date);
        match action {
            NavigatorAction::Move(date) => {
                log::trace!("focus {key} -> {date}");
                self.focused_date = Some(date);
            },
            NavigatorAction::ClearFocus => {
                log::trace!("focus cleared");
                self.focused_date = None;
            },
            NavigatorAction::Commit(_) | NavigatorAction::Ignore => {},
        }
        action
    }

    /// Places focus on `date`, or on the 1st of `anchor`, unless focus already
    /// exists. Returns `true` if focus was placed.
    pub fn initialize_focus(&mut self, date: Option<CalendarDate>, anchor: YearMonth) -> bool {
        if self.focused_date.is_some() {
            return false;
        }
        let initial = date.unwrap_or_else(|| anchor.first_day());
        log::trace!("focus initialized at {initial}");
        self.focused_date = Some(initial);
        true
    }
}

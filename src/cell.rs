use serde::Serialize;

use crate::CalendarDate;

/// How a host should draw a day cell, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellVisual {
    Disabled,
    /// Start or end of the selection
    Endpoint,
    InRange,
    HoverPreview,
    Past,
    Today,
    Default,
}

/// Everything the engine knows about one day cell at this instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct CellState {
    pub date:          CalendarDate,
    pub is_start:      bool,
    pub is_end:        bool,
    pub in_range:      bool,
    pub hover_preview: bool,
    pub is_today:      bool,
    pub is_past:       bool,
    pub is_disabled:   bool,
    pub is_focused:    bool,
}

impl CellState {
    /// Collapses the flags into a single style. A disabled cell wins over
    /// everything, and an endpoint over range or preview shading.
    pub const fn visual(&self) -> CellVisual {
        if self.is_disabled {
            CellVisual::Disabled
        } else if self.is_selected() {
            CellVisual::Endpoint
        } else if self.in_range {
            CellVisual::InRange
        } else if self.hover_preview {
            CellVisual::HoverPreview
        } else if self.is_past {
            CellVisual::Past
        } else if self.is_today {
            CellVisual::Today
        } else {
            CellVisual::Default
        }
    }

    pub const fn is_selected(&self) -> bool {
        self.is_start || self.is_end
    }

    /// The single tab stop of the grid: focused and not disabled
    pub const fn is_focusable(&self) -> bool {
        self.is_focused && !self.is_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn plain() -> CellState {
        CellState {
            date:          date(2024, 6, 20),
            is_start:      false,
            is_end:        false,
            in_range:      false,
            hover_preview: false,
            is_today:      false,
            is_past:       false,
            is_disabled:   false,
            is_focused:    false,
        }
    }

    #[test]
    fn test_visual_priority() {
        assert_eq!(plain().visual(), CellVisual::Default);

        let today = CellState { is_today: true, ..plain() };
        assert_eq!(today.visual(), CellVisual::Today);

        let past_today = CellState {
            is_past: true,
            ..today
        };
        assert_eq!(past_today.visual(), CellVisual::Past);

        let preview = CellState {
            hover_preview: true,
            ..past_today
        };
        assert_eq!(preview.visual(), CellVisual::HoverPreview);

        let in_range = CellState {
            in_range: true,
            ..preview
        };
        assert_eq!(in_range.visual(), CellVisual::InRange);

        let endpoint = CellState {
            is_end: true,
            ..in_range
        };
        assert_eq!(endpoint.visual(), CellVisual::Endpoint);

        let disabled = CellState {
            is_disabled: true,
            ..endpoint
        };
        assert_eq!(disabled.visual(), CellVisual::Disabled);
    }

    #[test]
    fn test_focusable_only_when_enabled() {
        let focused = CellState {
            is_focused: true,
            ..plain()
        };
        assert!(focused.is_focusable());

        let disabled = CellState {
            is_disabled: true,
            ..focused
        };
        assert!(!disabled.is_focusable());
        assert!(!plain().is_focusable());
    }

    #[test]
    fn test_is_selected() {
        assert!(!plain().is_selected());
        assert!(CellState { is_start: true, ..plain() }.is_selected());
        assert!(CellState { is_end: true, ..plain() }.is_selected());
    }

    #[test]
    fn test_serialize_visual() {
        assert_eq!(
            serde_json::to_string(&CellVisual::HoverPreview).unwrap(),
            r#""hover_preview""#
        );
    }
}

use crate::{CalendarDate, DateRange, Selection};

/// The day currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hover_date: Option<CalendarDate>,
}

impl HoverState {
    pub const fn new() -> Self {
        Self { hover_date: None }
    }

    pub const fn hover_date(&self) -> Option<CalendarDate> {
        self.hover_date
    }

    /// Records pointer enter (`Some`) or leave (`None`). Returns `true` on change.
    pub fn set(&mut self, date: Option<CalendarDate>) -> bool {
        if self.hover_date == date {
            return false;
        }
        log::trace!("hover {:?} -> {date:?}", self.hover_date);
        self.hover_date = date;
        true
    }

    pub fn clear(&mut self) {
        self.hover_date = None;
    }

    /// The provisional range between the chosen start and the hovered day, in
    /// either direction. `None` unless a start is set, no end is set, and
    /// something is hovered.
    pub fn preview_range(&self, selection: &Selection) -> Option<DateRange> {
        if !selection.awaiting_end() {
            return None;
        }
        let start = selection.start()?;
        let hover = self.hover_date?;
        DateRange::new(start.min(hover), start.max(hover)).ok()
    }

    pub fn is_preview(&self, selection: &Selection, date: CalendarDate) -> bool {
        self.preview_range(selection)
            .is_some_and(|preview| preview.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisabledPolicy;
    use crate::test_utils::date;

    fn selection_from(clicks: &[CalendarDate]) -> Selection {
        let policy = DisabledPolicy::new(date(2024, 1, 1));
        let mut selection = Selection::new();
        for &click in clicks {
            selection.select_date(click, &policy);
        }
        selection
    }

    #[test]
    fn test_preview_forward() {
        let selection = selection_from(&[date(2024, 6, 10)]);
        let mut hover = HoverState::new();
        hover.set(Some(date(2024, 6, 14)));

        assert!(hover.is_preview(&selection, date(2024, 6, 10)));
        assert!(hover.is_preview(&selection, date(2024, 6, 12)));
        assert!(hover.is_preview(&selection, date(2024, 6, 14)));
        assert!(!hover.is_preview(&selection, date(2024, 6, 15)));
        assert!(!hover.is_preview(&selection, date(2024, 6, 9)));
    }

    #[test]
    fn test_preview_is_order_independent() {
        let selection = selection_from(&[date(2024, 6, 10)]);
        let mut hover = HoverState::new();
        hover.set(Some(date(2024, 6, 6)));

        assert!(hover.is_preview(&selection, date(2024, 6, 6)));
        assert!(hover.is_preview(&selection, date(2024, 6, 8)));
        assert!(hover.is_preview(&selection, date(2024, 6, 10)));
        assert!(!hover.is_preview(&selection, date(2024, 6, 11)));
        assert_eq!(
            hover.preview_range(&selection).map(|r| r.dates()),
            Some((date(2024, 6, 6), date(2024, 6, 10)))
        );
    }

    #[test]
    fn test_no_preview_once_committed() {
        let selection = selection_from(&[date(2024, 6, 10), date(2024, 6, 20)]);
        let mut hover = HoverState::new();
        hover.set(Some(date(2024, 6, 25)));

        assert!(!hover.is_preview(&selection, date(2024, 6, 15)));
        assert!(!hover.is_preview(&selection, date(2024, 6, 22)));
        assert_eq!(hover.preview_range(&selection), None);
    }

    #[test]
    fn test_no_preview_without_start_or_hover() {
        let mut hover = HoverState::new();
        hover.set(Some(date(2024, 6, 14)));
        assert!(!hover.is_preview(&Selection::new(), date(2024, 6, 14)));

        let selection = selection_from(&[date(2024, 6, 10)]);
        assert!(!HoverState::new().is_preview(&selection, date(2024, 6, 10)));
    }

    #[test]
    fn test_set_reports_changes() {
        let mut hover = HoverState::default();
        assert!(hover.set(Some(date(2024, 6, 14))));
        assert!(!hover.set(Some(date(2024, 6, 14))));
        assert!(hover.set(None));
        assert_eq!(hover.hover_date(), None);

        hover.set(Some(date(2024, 6, 14)));
        hover.clear();
        assert_eq!(hover.hover_date(), None);
    }
}

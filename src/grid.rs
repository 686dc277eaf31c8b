use crate::{CalendarDate, DAYS_PER_WEEK, YearMonth};

/// Lays out one month for a Sunday-first, seven-column grid.
///
/// The result holds one `None` per weekday before the 1st, then every day of the
/// month in order. No trailing padding is added, so the final row may be short.
pub fn generate_grid(anchor: YearMonth) -> Vec<Option<CalendarDate>> {
    let leading = usize::from(anchor.first_weekday().index());
    let days = anchor.days_in_month();

    let mut cells = Vec::with_capacity(leading + usize::from(days));
    cells.resize(leading, None);
    cells.extend((1..=days).map(|day| anchor.day(day)));
    cells
}

/// The cells of a single displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    anchor: YearMonth,
    cells:  Vec<Option<CalendarDate>>,
}

impl MonthGrid {
    pub fn new(anchor: YearMonth) -> Self {
        Self {
            anchor,
            cells: generate_grid(anchor),
        }
    }

    pub const fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub fn cells(&self) -> &[Option<CalendarDate>] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }

    /// Populated cells only, in ascending order
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Rows of up to seven cells
    pub fn weeks(&self) -> std::slice::Chunks<'_, Option<CalendarDate>> {
        self.cells.chunks(usize::from(DAYS_PER_WEEK))
    }
}

//! Column sorting for the classroom table.

use std::cmp::Ordering;

use crate::classroom::Classroom;

/// Columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Code,
    Name,
    SeatCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// At most one column is sorted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub order: SortOrder,
}

impl SortState {
    /// Clicking the same column goes ascending, descending, then unsorted.
    /// A different column always starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        match (self.column, self.order) {
            (Some(current), SortOrder::Ascending) if current == column => {
                self.order = SortOrder::Descending;
            }
            (Some(current), SortOrder::Descending) if current == column => {
                self.column = None;
                self.order = SortOrder::Ascending;
            }
            _ => {
                self.column = Some(column);
                self.order = SortOrder::Ascending;
            }
        }
    }

    /// Order indicator for a column header, if that column is sorted.
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        match (self.column, self.order) {
            (Some(current), SortOrder::Ascending) if current == column => Some("▲"),
            (Some(current), SortOrder::Descending) if current == column => Some("▼"),
            _ => None,
        }
    }

    /// Stable sort; leaves the slice untouched when no column is selected.
    pub fn apply(&self, rows: &mut [&Classroom]) {
        let Some(column) = self.column else {
            return;
        };

        rows.sort_by(|a, b| {
            let ordering = compare(column, a, b);
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}

fn compare(column: SortColumn, a: &Classroom, b: &Classroom) -> Ordering {
    match column {
        SortColumn::Code => compare_text(&a.code, &b.code),
        SortColumn::Name => compare_text(&a.name, &b.name),
        SortColumn::SeatCount => a.seat_count.cmp(&b.seat_count),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

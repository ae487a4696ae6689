//! Row layout and header indicators for the project table.

use crate::record::Project;
use crate::sort::{SortColumn, SortDirection, SortSpec};
use crate::view_state::PageSize;

/// One body row of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Record(Project),
    /// Blank row keeping the table height constant on short pages.
    Padding,
}

/// Visible records followed by enough padding rows to fill the page.
#[must_use]
pub fn table_rows(visible: &[Project], page_size: PageSize) -> Vec<TableRow> {
    let padding = page_size.get().saturating_sub(visible.len());
    visible
        .iter()
        .cloned()
        .map(TableRow::Record)
        .chain(std::iter::repeat_n(TableRow::Padding, padding))
        .collect()
}

/// Placeholder rows shown by the skeleton while the dataset loads.
#[must_use]
pub const fn skeleton_rows(page_size: PageSize) -> usize {
    page_size.get()
}

/// Sort icon next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    #[must_use]
    pub fn for_column(sort: &SortSpec, column: SortColumn) -> Self {
        if sort.column != column {
            return Self::Neutral;
        }
        match sort.direction {
            SortDirection::Ascending => Self::Ascending,
            SortDirection::Descending => Self::Descending,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Neutral => "↕",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Header text for `column`, e.g. `S.No ↑`.
#[must_use]
pub fn header_label(sort: &SortSpec, column: SortColumn) -> String {
    format!(
        "{} {}",
        column.label(),
        SortIndicator::for_column(sort, column).glyph()
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn projects(count: u32) -> Vec<Project> {
        (1..=count).map(|n| Project::new(n, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_full_page_has_no_padding() {
        let rows = table_rows(&projects(5), PageSize::new(5).unwrap());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| matches!(row, TableRow::Record(_))));
    }

    #[test]
    fn test_short_page_is_padded() {
        let rows = table_rows(&projects(10), PageSize::new(20).unwrap());
        assert_eq!(rows.len(), 20);
        let padding = rows.iter().filter(|row| **row == TableRow::Padding).count();
        assert_eq!(padding, 10);
        assert!(matches!(rows.first(), Some(TableRow::Record(p)) if p.sequence == 1));
    }

    #[test]
    fn test_empty_page_is_all_padding() {
        let rows = table_rows(&[], PageSize::new(15).unwrap());
        assert_eq!(rows, vec![TableRow::Padding; 15]);
    }

    #[test]
    fn test_skeleton_rows_match_page_size() {
        assert_eq!(skeleton_rows(PageSize::new(10).unwrap()), 10);
    }

    #[test]
    fn test_indicator_neutral_for_inactive_column() {
        let sort = SortSpec::default();
        assert_eq!(
            SortIndicator::for_column(&sort, SortColumn::AmountPledged),
            SortIndicator::Neutral
        );
    }

    #[test]
    fn test_indicator_follows_direction() {
        let asc = SortSpec::new(SortColumn::PercentageFunded, SortDirection::Ascending);
        let desc = SortSpec::new(SortColumn::PercentageFunded, SortDirection::Descending);
        assert_eq!(
            SortIndicator::for_column(&asc, SortColumn::PercentageFunded),
            SortIndicator::Ascending
        );
        assert_eq!(
            SortIndicator::for_column(&desc, SortColumn::PercentageFunded),
            SortIndicator::Descending
        );
    }

    #[test]
    fn test_header_label() {
        let sort = SortSpec::default();
        assert_eq!(header_label(&sort, SortColumn::Sequence), "S.No ↑");
        assert_eq!(header_label(&sort, SortColumn::AmountPledged), "Amount Pledged ↕");
    }
}

//! Single-column sorting over projects.

use std::cmp::Ordering;
use std::fmt;

use crate::record::Project;

/// Sortable column of the project table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    #[default]
    Sequence,
    PercentageFunded,
    AmountPledged,
}

impl SortColumn {
    /// Columns in display order.
    pub const ALL: [Self; 3] = [Self::Sequence, Self::PercentageFunded, Self::AmountPledged];

    /// Value this column sorts on.
    #[must_use]
    pub fn key(self, project: &Project) -> f64 {
        match self {
            Self::Sequence => f64::from(project.sequence),
            Self::PercentageFunded => project.percentage_funded,
            Self::AmountPledged => project.amount_pledged,
        }
    }

    /// Tag used in the `sortColumn` query parameter (the dataset key).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sequence => "s.no",
            Self::PercentageFunded => "percentage.funded",
            Self::AmountPledged => "amt.pledged",
        }
    }

    /// Parses a query-parameter tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.tag() == tag)
    }

    /// Header text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sequence => "S.No",
            Self::PercentageFunded => "Percentage Funded",
            Self::AmountPledged => "Amount Pledged",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Tag used in the `sortDirection` query parameter.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parses a query-parameter tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Active column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Ordering of two projects under this spec.
    ///
    /// Equal keys compare as `Equal`; no secondary key is consulted.
    #[must_use]
    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let ordering = self.column.key(a).total_cmp(&self.column.key(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sorts projects in place.
///
/// The sort is unstable: rows with equal keys may come out in any order.
pub fn sort_projects(projects: &mut [Project], spec: SortSpec) {
    projects.sort_unstable_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.sequence).collect()
    }

    fn sample() -> Vec<Project> {
        vec![
            Project::new(3, 10.0, 300.0),
            Project::new(1, 30.0, 100.0),
            Project::new(2, 20.0, 500.0),
        ]
    }

    #[test]
    fn test_column_tags_round_trip() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::from_tag(column.tag()), Some(column));
        }
        assert_eq!(SortColumn::from_tag("title"), None);
    }

    #[test]
    fn test_direction_tags_and_toggle() {
        assert_eq!(SortDirection::from_tag("asc"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::from_tag("desc"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::from_tag("DESC"), None);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn test_key_accessors() {
        let project = Project::new(7, 42.5, 1999.0);
        assert_eq!(SortColumn::Sequence.key(&project), 7.0);
        assert_eq!(SortColumn::PercentageFunded.key(&project), 42.5);
        assert_eq!(SortColumn::AmountPledged.key(&project), 1999.0);
    }

    #[test]
    fn test_sort_by_sequence_ascending() {
        let mut projects = sample();
        sort_projects(&mut projects, SortSpec::default());
        assert_eq!(sequences(&projects), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_percentage_descending() {
        let mut projects = sample();
        sort_projects(
            &mut projects,
            SortSpec::new(SortColumn::PercentageFunded, SortDirection::Descending),
        );
        assert_eq!(sequences(&projects), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_pledged_ascending() {
        let mut projects = sample();
        sort_projects(
            &mut projects,
            SortSpec::new(SortColumn::AmountPledged, SortDirection::Ascending),
        );
        assert_eq!(sequences(&projects), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_survives_nan_keys() {
        let mut projects = vec![
            Project::new(1, f64::NAN, 0.0),
            Project::new(2, 5.0, 0.0),
            Project::new(3, 1.0, 0.0),
        ];
        sort_projects(
            &mut projects,
            SortSpec::new(SortColumn::PercentageFunded, SortDirection::Ascending),
        );
        assert_eq!(projects.len(), 3);
        assert_eq!(projects.first().map(|p| p.sequence), Some(3));
    }

    #[test]
    fn test_sort_empty_slice() {
        let mut projects: Vec<Project> = Vec::new();
        sort_projects(&mut projects, SortSpec::default());
        assert!(projects.is_empty());
    }
}

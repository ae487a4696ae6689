//! Client-side pagination and the page-navigation model.

use crate::record::Project;
use crate::sort::sort_projects;
use crate::view_state::{PageSize, ViewState};

/// Default number of page buttons shown on each side of the current page.
pub const DEFAULT_WINDOW_RADIUS: usize = 3;

/// Records on the 1-based `page`, clipped to what is available.
///
/// A page past the end yields an empty slice rather than an error.
#[must_use]
pub fn paginate<T>(records: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(records.len());
    let end = start.saturating_add(size).min(records.len());
    records.get(start..end).unwrap_or_default()
}

/// Number of pages needed for `total_records`; zero for an empty dataset.
#[must_use]
pub const fn total_pages(total_records: usize, page_size: PageSize) -> usize {
    total_records.div_ceil(page_size.get())
}

/// Sorts a copy of `records` by the view's sort and returns its current page.
#[must_use]
pub fn visible_projects(records: &[Project], view: &ViewState) -> Vec<Project> {
    let mut sorted = records.to_vec();
    sort_projects(&mut sorted, view.sort());
    paginate(&sorted, view.page(), view.page_size()).to_vec()
}

/// What the pagination strip shows and which pages its buttons lead to.
///
/// Targets are `None` when the matching button is disabled, and every
/// `Some` target lies in `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigation {
    current_page: usize,
    page_size: PageSize,
    total_pages: usize,
    page_numbers: Vec<usize>,
}

impl PageNavigation {
    #[must_use]
    pub fn new(total_records: usize, view: &ViewState, window_radius: usize) -> Self {
        let current_page = view.page();
        let total_pages = total_pages(total_records, view.page_size());
        let start = current_page.saturating_sub(window_radius).max(1);
        let end = current_page.saturating_add(window_radius).min(total_pages);

        Self {
            current_page,
            page_size: view.page_size(),
            total_pages,
            page_numbers: (start..=end).collect(),
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Page-number buttons, ascending.
    #[must_use]
    pub fn page_numbers(&self) -> &[usize] {
        &self.page_numbers
    }

    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// True on the last page, past it, or when there are no pages at all.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.is_first_page() { None } else { Some(1) }
    }

    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        if self.is_first_page() {
            None
        } else {
            Some(self.current_page.saturating_sub(1).min(self.last_page_or_one()))
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        if self.is_last_page() {
            None
        } else {
            Some(self.current_page.saturating_add(1))
        }
    }

    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.is_last_page() {
            None
        } else {
            Some(self.total_pages)
        }
    }

    /// Status line above the buttons.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} | Showing {} records per page",
            self.current_page, self.total_pages, self.page_size
        )
    }

    const fn last_page_or_one(&self) -> usize {
        if self.total_pages == 0 { 1 } else { self.total_pages }
    }
}

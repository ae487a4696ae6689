//! View state (page, page size, sort) and its query-string form.
//!
//! [`ViewState`] is the single owner of what the user is looking at. It
//! round-trips through the address bar via [`ViewState::from_query_string`]
//! and [`ViewState::to_query_string`] so a reload or a shared link lands on
//! the same view. Missing or malformed parameters are never errors; they fall
//! back to defaults and mark the parse as incomplete.

use std::borrow::Cow;
use std::fmt;

use url::form_urlencoded;

use crate::error::Error;
use crate::result::{Result, ResultExt};
use crate::sort::{SortColumn, SortDirection, SortSpec};

/// Query-string keys owned by the explorer.
pub mod keys {
    pub const PAGE: &str = "page";
    pub const SIZE: &str = "size";
    pub const SORT_COLUMN: &str = "sortColumn";
    pub const SORT_DIRECTION: &str = "sortDirection";

    pub const ALL: [&str; 4] = [PAGE, SIZE, SORT_COLUMN, SORT_DIRECTION];
}

/// Page sizes offered by the page-size selector.
pub const ALLOWED_PAGE_SIZES: [usize; 4] = [5, 10, 15, 20];

/// Number of records per page, restricted to [`ALLOWED_PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    pub const DEFAULT: Self = Self(5);

    /// Validates `size` against the allowed set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPageSize` for any size outside
    /// [`ALLOWED_PAGE_SIZES`].
    pub fn new(size: usize) -> Result<Self> {
        if ALLOWED_PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(Error::InvalidPageSize { size })
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Every allowed size, in selector order.
    pub fn all() -> impl Iterator<Item = Self> {
        ALLOWED_PAGE_SIZES.into_iter().map(Self)
    }

    fn from_query_value(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|size| Self::new(size).into_option_logged())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current page, page size and sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewState {
    page: usize,
    page_size: PageSize,
    sort: SortSpec,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::DEFAULT,
            sort: SortSpec::default(),
        }
    }
}

/// Outcome of reading a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedQuery {
    pub state: ViewState,
    /// False when any of the four keys was missing or invalid, i.e. the
    /// address bar does not yet spell out the whole state.
    pub complete: bool,
}

impl ViewState {
    #[must_use]
    pub fn new(page: usize, page_size: PageSize, sort: SortSpec) -> Self {
        Self {
            page: page.max(1),
            page_size,
            sort,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Sort by `column`.
    ///
    /// Selecting the active column flips the direction; selecting another
    /// column switches to it ascending. Either way the view returns to page 1.
    pub fn set_sort(&mut self, column: SortColumn) {
        self.sort = if self.sort.column == column {
            SortSpec::new(column, self.sort.direction.toggled())
        } else {
            SortSpec::new(column, SortDirection::Ascending)
        };
        self.page = 1;
    }

    /// Jump to a 1-based page. Not clamped to the dataset; 0 becomes 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Reads the view from a query string, with or without the leading `?`.
    ///
    /// The first occurrence of a repeated key wins. Unknown keys are ignored.
    #[must_use]
    pub fn from_query_string(query: &str) -> ParsedQuery {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        let lookup = |key: &str| first_value(&pairs, key);

        let page = resolve(keys::PAGE, lookup(keys::PAGE), parse_page);
        let page_size = resolve(keys::SIZE, lookup(keys::SIZE), PageSize::from_query_value);
        let column = resolve(keys::SORT_COLUMN, lookup(keys::SORT_COLUMN), SortColumn::from_tag);
        let direction = resolve(
            keys::SORT_DIRECTION,
            lookup(keys::SORT_DIRECTION),
            SortDirection::from_tag,
        );

        let complete =
            page.is_some() && page_size.is_some() && column.is_some() && direction.is_some();

        ParsedQuery {
            state: Self::new(
                page.unwrap_or(1),
                page_size.unwrap_or_default(),
                SortSpec::new(column.unwrap_or_default(), direction.unwrap_or_default()),
            ),
            complete,
        }
    }

    /// The four explorer keys in canonical order, without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut serializer);
        serializer.finish()
    }

    /// Rewrites the explorer keys inside `existing`, keeping every other
    /// parameter after them in its original order.
    #[must_use]
    pub fn merge_into_query(&self, existing: &str) -> String {
        let existing = existing.strip_prefix('?').unwrap_or(existing);
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut serializer);
        form_urlencoded::parse(existing.as_bytes())
            .filter(|(key, _)| !is_explorer_key(key))
            .for_each(|(key, value)| {
                serializer.append_pair(&key, &value);
            });
        serializer.finish()
    }

    fn append_pairs(&self, serializer: &mut form_urlencoded::Serializer<'_, String>) {
        serializer
            .append_pair(keys::PAGE, &self.page.to_string())
            .append_pair(keys::SIZE, &self.page_size.to_string())
            .append_pair(keys::SORT_COLUMN, self.sort.column.tag())
            .append_pair(keys::SORT_DIRECTION, self.sort.direction.tag());
    }
}

fn first_value<'a>(pairs: &'a [(Cow<'a, str>, Cow<'a, str>)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_ref())
}

fn is_explorer_key(key: &str) -> bool {
    keys::ALL.contains(&key)
}

fn parse_page(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|page| *page >= 1)
}

fn resolve<T>(key: &str, raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = raw?;
    let parsed = parse(raw);
    if parsed.is_none() {
        tracing::debug!(key, value = raw, "invalid query parameter, falling back to default");
    }
    parsed
}

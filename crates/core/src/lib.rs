//! Core of Project Explorer: records, view state, sorting and pagination.
//!
//! Everything here is plain Rust with no browser dependency, so the whole
//! view pipeline (query string → view state → sorted page → table rows)
//! is testable natively. The Leptos frontend in `explorer-ui` only wires
//! these pieces to signals and the address bar.
//!
//! ## Module Structure
//! - `record`: the `Project` record and its display helpers
//! - `sort`: sort columns, directions and the sort itself
//! - `view_state`: page/size/sort state and its query-string form
//! - `pagination`: page slicing and the navigation model
//! - `table`: row layout and header sort indicators
//! - `load`: dataset source seam and loader state
//! - `config`: app settings
//! - `error`: error types

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod config;
pub mod error;
pub mod load;
pub mod pagination;
pub mod record;
pub mod result;
pub mod sort;
pub mod table;
pub mod view_state;

pub use config::ExplorerConfig;
pub use error::Error;
pub use load::{DatasetSource, LoadState, RawResponse, load_projects, parse_response};
pub use pagination::{PageNavigation, paginate, total_pages, visible_projects};
pub use record::Project;
pub use result::{Result, ResultExt};
pub use sort::{SortColumn, SortDirection, SortSpec, sort_projects};
pub use table::{SortIndicator, TableRow, header_label, skeleton_rows, table_rows};
pub use view_state::{ALLOWED_PAGE_SIZES, PageSize, ParsedQuery, ViewState};

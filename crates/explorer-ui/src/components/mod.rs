//! Reusable UI components
//!
//! - `project_table`: the sortable three-column table
//! - `table_loader`: skeleton shown while the dataset loads
//! - `pagination`: page summary, size selector and page buttons

pub mod pagination;
pub mod project_table;
pub mod table_loader;

pub use pagination::Pagination;
pub use project_table::ProjectTable;
pub use table_loader::ProjectTableLoader;

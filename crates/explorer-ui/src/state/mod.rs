//! Application state
//!
//! - `loader`: fetches the dataset once per mount and exposes its progress
//! - `view`: owns the page/size/sort state and keeps the address bar in sync
//! - `history`: thin wrapper over `window.location` and `window.history`

pub mod history;
pub mod loader;
pub mod view;

pub use history::HistoryMode;
pub use loader::{HttpSource, use_project_loader};
pub use view::ViewController;

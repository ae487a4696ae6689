//! Page components for Project Explorer

pub mod explorer;
pub mod not_found;

pub use explorer::Explorer;
pub use not_found::NotFound;

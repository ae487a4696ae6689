//! Leptos 0.7 CSR frontend for Project Explorer
//!
//! Browses the crowdfunding project dataset as a sortable, paginated table
//! whose view state lives in the address bar. All of the data shaping comes
//! from `explorer-core`; this crate owns the browser side.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Routing with leptos_router
//! - Dataset fetched once with gloo-net
//! - View state synced with the History API (push on intent, replace on mount)
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions
//! - `pages`: Top-level page components
//! - `components`: Table, skeleton loader and pagination bar
//! - `state`: Dataset loader, view controller and address-bar access
//! - `config`: Reads settings from the host page
//! - `error`: Error types for browser operations

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

// Trunk auto-mounts this through main.rs
pub use app::App;

#[cfg(test)]
mod tests;

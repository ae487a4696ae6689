//! WASM entry point for the Project Explorer CSR app
//!
//! Trunk compiles this to WASM; it installs the panic hook and the console
//! logger, then mounts the Leptos App component to the document body.

use explorer_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // tracing events reach the console through its `log` feature
    _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}

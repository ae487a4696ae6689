//! Main application component
//!
//! Provides the configuration context and the page shell around the router.

use leptos::prelude::*;

use crate::config::load_config;
use crate::router::AppRouter;

/// Root component: header, routed content and footer
///
/// Settings are read once from the host page and shared through context so
/// pages never reach into the DOM for them.
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Project Explorer"</h1>
            </header>
            <main class="app-main">
                <AppRouter />
            </main>
            <footer class="app-footer">
                <p>"Project Explorer - Leptos 0.7 CSR"</p>
            </footer>
        </div>
    }
}

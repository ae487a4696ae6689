//! Router configuration for Project Explorer

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Explorer, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const EXPLORER: &str = "/";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Explorer />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::EXPLORER, "/");
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }

    #[test]
    fn test_all_page_components_exist() {
        let _explorer = Explorer;
        let _not_found = NotFound;
    }
}

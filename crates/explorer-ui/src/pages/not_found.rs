//! 404 Not Found page component

use leptos::prelude::*;

use crate::router::routes;

/// Shown for any path other than the explorer
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - Page Not Found"</h1>
            <p>"There is nothing at this address."</p>
            <a href=routes::EXPLORER>"Back to the project list"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}

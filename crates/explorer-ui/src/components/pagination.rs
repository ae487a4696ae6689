//! Pagination bar: summary, page-size selector and page buttons

use explorer_core::{PageNavigation, PageSize, ResultExt};
use leptos::prelude::*;

/// Navigation target read off the current [`PageNavigation`].
type Target = fn(&PageNavigation) -> Option<usize>;

/// Controls under the table.
///
/// First/Previous are disabled on page 1 and Next/Last on the final page;
/// the numbered buttons cover a window around the current page.
#[component]
pub fn Pagination(
    navigation: Memo<PageNavigation>,
    page_size: Memo<PageSize>,
    on_page: Callback<usize>,
    on_page_size: Callback<PageSize>,
) -> impl IntoView {
    let nav_button = move |label: &'static str, class: &'static str, target: Target| {
        view! {
            <button
                class=class
                disabled=move || navigation.with(|nav| target(nav).is_none())
                on:click=move |_| {
                    if let Some(page) = navigation.with(target) {
                        on_page.run(page);
                    }
                }
            >
                {label}
            </button>
        }
    };

    let size_options = PageSize::all()
        .map(|size| {
            view! {
                <option value=size.to_string() prop:selected=move || page_size.get() == size>
                    {size.to_string()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="pagination">
            <span class="pagination-summary">
                {move || navigation.with(PageNavigation::summary)}
            </span>
            <label class="page-size">
                "Records per page "
                <select on:change=move |ev| match parse_page_size(&event_target_value(&ev)) {
                    Some(size) => on_page_size.run(size),
                    None => tracing::warn!("ignoring unknown page size selection"),
                }>
                    {size_options}
                </select>
            </label>
            <div class="pagination-buttons">
                {nav_button("First", "page-first", PageNavigation::first)}
                {nav_button("Previous", "page-previous", PageNavigation::previous)}
                {move || {
                    navigation.with(|nav| {
                        let current = nav.current_page();
                        nav.page_numbers()
                            .iter()
                            .copied()
                            .map(|page| {
                                view! {
                                    <button
                                        class=page_button_class(page, current)
                                        on:click=move |_| on_page.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
                {nav_button("Next", "page-next", PageNavigation::next)}
                {nav_button("Last", "page-last", PageNavigation::last)}
            </div>
        </div>
    }
}

fn parse_page_size(value: &str) -> Option<PageSize> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|size| PageSize::new(size).into_option_logged())
}

const fn page_button_class(page: usize, current: usize) -> &'static str {
    if page == current {
        "page-number active"
    } else {
        "page-number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_component_exists() {
        let _component = Pagination;
    }

    #[test]
    fn test_parse_page_size_accepts_allowed_sizes() {
        assert_eq!(parse_page_size("15").map(PageSize::get), Some(15));
        assert_eq!(parse_page_size("7"), None);
        assert_eq!(parse_page_size("ten"), None);
    }

    #[test]
    fn test_active_page_button() {
        assert_eq!(page_button_class(2, 2), "page-number active");
        assert_eq!(page_button_class(3, 2), "page-number");
    }
}

//! Project explorer page
//!
//! Wires the dataset loader and the view controller to the table and the
//! pagination bar. Data flows one way: load state + view state → sorted
//! records → current page → table rows.

use explorer_core::{
    ExplorerConfig, LoadState, PageNavigation, PageSize, SortColumn, paginate, skeleton_rows,
    sort_projects, table_rows,
};
use leptos::prelude::*;

use crate::components::{Pagination, ProjectTable, ProjectTableLoader};
use crate::state::{ViewController, use_project_loader};

/// What the page body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Loading,
    Failed(String),
    Ready,
}

impl From<&LoadState> for Phase {
    fn from(state: &LoadState) -> Self {
        if state.is_loading() {
            Self::Loading
        } else if let Some(message) = state.error_message() {
            Self::Failed(message.to_string())
        } else {
            Self::Ready
        }
    }
}

#[component]
pub fn Explorer() -> impl IntoView {
    let config = use_context::<ExplorerConfig>().unwrap_or_default();
    let load = use_project_loader(&config);
    let controller = ViewController::mount();
    let view_state = controller.state();

    let sort = Memo::new(move |_| view_state.get().sort());
    let page_size = Memo::new(move |_| view_state.get().page_size());

    // Re-sorts only when the records or the sort change, not on paging.
    let sorted = Memo::new(move |_| {
        let mut projects = load.with(|state| state.projects().to_vec());
        sort_projects(&mut projects, sort.get());
        projects
    });
    let rows = Memo::new(move |_| {
        let view = view_state.get();
        sorted.with(|projects| {
            table_rows(
                paginate(projects, view.page(), view.page_size()),
                view.page_size(),
            )
        })
    });
    let radius = config.page_window_radius;
    let navigation = Memo::new(move |_| {
        PageNavigation::new(sorted.with(Vec::len), &view_state.get(), radius)
    });
    let phase = Memo::new(move |_| load.with(|state: &LoadState| Phase::from(state)));

    let on_sort = Callback::new(move |column: SortColumn| controller.set_sort(column));
    let on_page = Callback::new(move |page: usize| controller.set_page(page));
    let on_page_size = Callback::new(move |size: PageSize| controller.set_page_size(size));

    view! {
        <div class="explorer-page">
            {move || match phase.get() {
                Phase::Loading => {
                    view! { <ProjectTableLoader rows=skeleton_rows(page_size.get()) /> }
                        .into_any()
                }
                Phase::Failed(message) => {
                    view! {
                        <div class="error-message" role="alert">
                            {message}
                        </div>
                    }
                        .into_any()
                }
                Phase::Ready => {
                    view! {
                        <ProjectTable rows=rows sort=sort on_sort=on_sort />
                        <Pagination
                            navigation=navigation
                            page_size=page_size
                            on_page=on_page
                            on_page_size=on_page_size
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

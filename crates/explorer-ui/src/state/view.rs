//! View controller: the single owner of page, page size and sort.
//!
//! Seeded from the address bar on mount. Every user intent updates the
//! state and pushes one history entry; Back/Forward re-seed it.

use explorer_core::{PageSize, ParsedQuery, SortColumn, ViewState};
use leptos::ev;
use leptos::prelude::*;

use crate::state::history::{self, HistoryMode};

#[derive(Debug, Clone, Copy)]
pub struct ViewController {
    state: RwSignal<ViewState>,
}

impl ViewController {
    /// Reads the address bar, normalizes it when it does not spell out the
    /// whole state, and follows Back/Forward until the owner is disposed.
    #[must_use]
    pub fn mount() -> Self {
        let parsed = read_address_bar();
        let controller = Self {
            state: RwSignal::new(parsed.state),
        };
        if !parsed.complete {
            controller.persist(HistoryMode::Replace);
        }

        let handle = window_event_listener(ev::popstate, move |_| {
            controller.reseed_from_address_bar();
        });
        on_cleanup(move || handle.remove());

        controller
    }

    #[must_use]
    pub fn state(&self) -> ReadSignal<ViewState> {
        self.state.read_only()
    }

    /// Header click: toggle on the active column, otherwise switch to
    /// `column` ascending. Returns to page 1.
    pub fn set_sort(&self, column: SortColumn) {
        self.state.update(|state| state.set_sort(column));
        self.persist(HistoryMode::Push);
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|state| state.set_page(page));
        self.persist(HistoryMode::Push);
    }

    /// Returns to page 1.
    pub fn set_page_size(&self, page_size: PageSize) {
        self.state.update(|state| state.set_page_size(page_size));
        self.persist(HistoryMode::Push);
    }

    fn reseed_from_address_bar(&self) {
        let parsed = read_address_bar();
        self.state.set(parsed.state);
        if !parsed.complete {
            self.persist(HistoryMode::Replace);
        }
    }

    fn persist(&self, mode: HistoryMode) {
        let state = self.state.get_untracked();
        let existing = history::current_search().unwrap_or_default();
        let query = state.merge_into_query(&existing);
        if let Err(e) = history::write_query(&query, mode) {
            tracing::warn!(error = %e, query = %query, "could not update the address bar");
        }
    }
}

fn read_address_bar() -> ParsedQuery {
    history::current_search().map_or_else(
        |e| {
            tracing::warn!(error = %e, "address bar unreadable, using the default view");
            ParsedQuery {
                state: ViewState::default(),
                complete: true,
            }
        },
        |search| ViewState::from_query_string(&search),
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "view_test.rs"]
mod view_test;

//! Skeleton placeholder shown while the dataset loads

use explorer_core::SortColumn;
use leptos::prelude::*;

/// Table-shaped placeholder with `rows` shimmering rows.
#[component]
pub fn ProjectTableLoader(rows: usize) -> impl IntoView {
    let headers = SortColumn::ALL
        .into_iter()
        .map(|column| view! { <th>{column.label()}</th> })
        .collect_view();
    let body = (0..rows)
        .map(|_| {
            view! {
                <tr class="skeleton-row">
                    <td><div class="skeleton"></div></td>
                    <td><div class="skeleton"></div></td>
                    <td><div class="skeleton"></div></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="project-table loading" aria-busy="true">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

//! Sortable project table

use explorer_core::{SortColumn, SortIndicator, SortSpec, TableRow, header_label};
use leptos::prelude::*;

/// Non-breaking space keeps padding rows at full height.
const EMPTY_CELL: &str = "\u{a0}";

/// Three-column table of the current page.
///
/// `rows` always holds exactly one page worth of rows, padded with
/// [`TableRow::Padding`], so the table height never changes between pages.
#[component]
pub fn ProjectTable(
    rows: Memo<Vec<TableRow>>,
    sort: Memo<SortSpec>,
    on_sort: Callback<SortColumn>,
) -> impl IntoView {
    let headers = SortColumn::ALL
        .into_iter()
        .map(|column| {
            view! {
                <th
                    class="sortable"
                    style="cursor: pointer"
                    aria-sort=move || aria_sort(SortIndicator::for_column(&sort.get(), column))
                    on:click=move |_| on_sort.run(column)
                >
                    {move || header_label(&sort.get(), column)}
                </th>
            }
        })
        .collect_view();

    view! {
        <table class="project-table">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>
                {move || rows.get().into_iter().map(render_row).collect_view()}
            </tbody>
        </table>
    }
}

fn render_row(row: TableRow) -> AnyView {
    match row {
        TableRow::Record(project) => view! {
            <tr class="project-row" title=project.title.clone()>
                <td>{project.sequence}</td>
                <td>{project.percentage_label()}</td>
                <td>{project.pledged_label()}</td>
            </tr>
        }
        .into_any(),
        TableRow::Padding => view! {
            <tr class="empty-row" aria-hidden="true">
                <td>{EMPTY_CELL}</td>
                <td>{EMPTY_CELL}</td>
                <td>{EMPTY_CELL}</td>
            </tr>
        }
        .into_any(),
    }
}

const fn aria_sort(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Neutral => "none",
        SortIndicator::Ascending => "ascending",
        SortIndicator::Descending => "descending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_table_component_exists() {
        let _component = ProjectTable;
    }

    #[test]
    fn test_aria_sort_follows_indicator() {
        assert_eq!(aria_sort(SortIndicator::Neutral), "none");
        assert_eq!(aria_sort(SortIndicator::Ascending), "ascending");
        assert_eq!(aria_sort(SortIndicator::Descending), "descending");
    }
}

use contracts::shared::database_browser::{ColumnLayout, ResultSet, ResultView};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Space, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

use crate::shared::components::table::format_result_count;
use crate::shared::database_browser::view_model::DatabaseBrowserVm;
use crate::shared::icons::icon;

// ============================================================================
// ResultsViewer - toolbar + table/chart body, hidden until the first result
// ============================================================================

#[component]
pub fn ResultsViewer(vm: DatabaseBrowserVm, column_layout: ColumnLayout) -> impl IntoView {
    view! {
        {move || vm.results.get().map(|set| {
            let count = set.len();
            view! {
                <div class="results-viewer">
                    <div class="results-viewer__toolbar">
                        <Space>
                            {ResultView::ALL.into_iter().map(|option| view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || if vm.view.get() == option { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                    on_click=move |_| vm.select_view(option)
                                >
                                    {icon(option.icon())}
                                    {option.label()}
                                </Button>
                            }).collect_view()}
                        </Space>
                        <span class="results-viewer__count">{format_result_count(count)}</span>
                    </div>

                    <div class="results-viewer__body">
                        {move || match vm.view.get() {
                            ResultView::Table => view! {
                                <ResultsTable set=set.clone() column_layout=column_layout />
                            }.into_any(),
                            ResultView::Chart => view! {
                                <div class="empty-state">
                                    <p>"Chart view is not available yet"</p>
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            }
        })}
    }
}

// ============================================================================
// ResultsTable - header from the row keys, cells aligned to the header
// ============================================================================

#[component]
fn ResultsTable(set: ResultSet, column_layout: ColumnLayout) -> impl IntoView {
    let columns = set.columns(column_layout);

    let header = (!columns.is_empty()).then(|| {
        let names = columns.clone();
        view! {
            <TableRow>
                {names.into_iter().map(|name| view! {
                    <TableHeaderCell>{name}</TableHeaderCell>
                }).collect_view()}
            </TableRow>
        }
    });

    let body = set
        .rows()
        .iter()
        .map(|row| {
            let cells = ResultSet::aligned_cells(row, &columns);
            view! {
                <TableRow>
                    {cells.into_iter().map(|value| view! {
                        <TableCell>
                            <TableCellLayout>{value.to_string()}</TableCellLayout>
                        </TableCell>
                    }).collect_view()}
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table>
            <TableHeader>{header}</TableHeader>
            <TableBody>{body}</TableBody>
        </Table>
    }
}

use contracts::shared::database_browser::TableDescriptor;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::table::format_row_count;
use crate::shared::database_browser::view_model::DatabaseBrowserVm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};

/// Searchable list of tables; a click forwards the table name
#[component]
pub fn TableListPanel(
    #[prop(into)] tables: Signal<Vec<TableDescriptor>>,
    vm: DatabaseBrowserVm,
    on_select_table: Callback<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let filtered = Memo::new(move |_| tables.with(|all| vm.filtered_tables(all)));

    view! {
        <Card>
            <div class="table-list">
                <SearchInput
                    value=vm.search_term
                    on_change=Callback::new(move |term: String| vm.search_term.set(term))
                    placeholder=placeholder
                />

                <h3 class="table-list__title">
                    {icon("database")}
                    "Tables"
                </h3>

                <div class="table-list__items">
                    {move || {
                        let term = vm.search_term.get();
                        filtered.get().into_iter().map(|table| {
                            let name = table.name.clone();
                            let label = if highlight {
                                highlight_matches(&table.name, &term)
                            } else {
                                view! { <span>{table.name.clone()}</span> }.into_any()
                            };

                            view! {
                                <div
                                    class="table-list__row"
                                    on:click=move |_| vm.select_table(name.clone(), &on_select_table)
                                >
                                    <div class="table-list__name">
                                        {icon("table")}
                                        {label}
                                    </div>
                                    <span class="table-list__count">
                                        {format_row_count(table.row_count)}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </Card>
    }
}

//! Database browser - table list on the left, query panel and results on the right

pub mod query_panel;
pub mod results_viewer;
pub mod table_list;

pub use query_panel::QueryPanel;
pub use results_viewer::ResultsViewer;
pub use table_list::TableListPanel;

use contracts::shared::database_browser::{BrowserSettings, TableDescriptor};
use leptos::prelude::*;
use thaw::Card;

use super::service::use_query_service;
use super::view_model::DatabaseBrowserVm;

// ============================================================================
// DatabaseBrowser - Main Component
// ============================================================================

/// Table browser with a natural-language / SQL query panel.
///
/// `on_select_table` receives the exact name of a clicked table. Queries go to
/// the `QueryService` found in context (see `provide_query_service`).
#[component]
pub fn DatabaseBrowser(
    #[prop(into)] tables: Signal<Vec<TableDescriptor>>,
    on_select_table: Callback<String>,
    #[prop(optional)] settings: Option<BrowserSettings>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let vm = DatabaseBrowserVm::new(settings.default_mode);
    let service = use_query_service();

    on_cleanup(move || vm.cancel_pending());

    let on_submit = Callback::new(move |_: ()| vm.submit(&service));

    view! {
        <div class="database-browser">
            <div class="database-browser__side">
                <TableListPanel
                    tables=tables
                    vm=vm
                    on_select_table=on_select_table
                    placeholder=settings.search_placeholder.clone()
                    highlight=settings.highlight_matches
                />
            </div>
            <div class="database-browser__main">
                <Card>
                    <QueryPanel vm=vm on_submit=on_submit />
                    <ResultsViewer vm=vm column_layout=settings.column_layout />
                </Card>
            </div>
        </div>
    }
}

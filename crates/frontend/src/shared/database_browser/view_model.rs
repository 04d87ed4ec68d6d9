//! ViewModel for the database browser

use std::future::Future;

use contracts::shared::database_browser::{
    filter_tables, QueryError, QueryMode, QueryRequest, QueryRunId, QueryRunTracker, ResultSet,
    ResultView, TableDescriptor,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::service::QueryServiceHandle;

/// ViewModel for the DatabaseBrowser component
#[derive(Clone, Copy)]
pub struct DatabaseBrowserVm {
    /// Table list filter
    pub search_term: RwSignal<String>,
    /// Active query tab
    pub mode: RwSignal<QueryMode>,
    /// Query text, shared by both tabs
    pub query_input: RwSignal<String>,
    /// Last successful result; `None` until the first run completes
    pub results: RwSignal<Option<ResultSet>>,
    /// Table or chart presentation of `results`
    pub view: RwSignal<ResultView>,
    /// A run is in flight
    pub running: RwSignal<bool>,
    /// Message of the last failed run
    pub error: RwSignal<Option<String>>,

    runs: StoredValue<QueryRunTracker>,
}

impl DatabaseBrowserVm {
    pub fn new(default_mode: QueryMode) -> Self {
        Self {
            search_term: RwSignal::new(String::new()),
            mode: RwSignal::new(default_mode),
            query_input: RwSignal::new(String::new()),
            results: RwSignal::new(None),
            view: RwSignal::new(ResultView::default()),
            running: RwSignal::new(false),
            error: RwSignal::new(None),
            runs: StoredValue::new(QueryRunTracker::new()),
        }
    }

    /// Tables matching the current search term (tracks `search_term`)
    pub fn filtered_tables(&self, tables: &[TableDescriptor]) -> Vec<TableDescriptor> {
        filter_tables(tables, &self.search_term.get())
    }

    /// Forwards a clicked table name to the host, once per click
    pub fn select_table(&self, name: String, on_select: &Callback<String>) {
        on_select.run(name);
    }

    /// Leaves the query text and current results untouched
    pub fn switch_mode(&self, mode: QueryMode) {
        self.mode.set(mode);
    }

    pub fn select_view(&self, view: ResultView) {
        self.view.set(view);
    }

    /// Registers a new run and snapshots the request. Supersedes any run in flight.
    pub fn begin_run(&self) -> Option<(QueryRunId, QueryRequest)> {
        let id = self.runs.try_update_value(|runs| runs.begin())?;
        let request = QueryRequest::new(self.mode.get_untracked(), self.query_input.get_untracked());

        self.running.set(true);
        self.error.set(None);

        Some((id, request))
    }

    /// Publishes the outcome of run `id` if it is still the current one.
    /// Returns whether anything was written.
    pub fn finish_run(&self, id: QueryRunId, outcome: Result<ResultSet, QueryError>) -> bool {
        let current = self
            .runs
            .try_with_value(|runs| runs.is_current(id))
            .unwrap_or(false);
        if !current {
            log!("Discarding result of superseded query run {}", id);
            return false;
        }

        match outcome {
            Ok(set) => {
                log!("Query run {} returned {} rows", id, set.len());
                let _ = self.results.try_set(Some(set));
            }
            Err(e) => {
                log!("Query run {} failed: {}", id, e);
                let _ = self.error.try_set(Some(e.to_string()));
            }
        }
        let _ = self.running.try_set(false);
        true
    }

    /// Starts a run against `service` and returns the future that publishes
    /// its outcome. Resolves to whether the outcome was still current.
    pub fn dispatch(
        &self,
        service: &QueryServiceHandle,
    ) -> Option<impl Future<Output = bool> + 'static> {
        let (id, request) = self.begin_run()?;
        log!(
            "Query run {}: {} ({} chars)",
            id,
            request.mode.label(),
            request.text.chars().count()
        );

        let pending = service.run(&request);
        let vm = *self;
        Some(async move {
            let outcome = pending.await;
            vm.finish_run(id, outcome)
        })
    }

    /// Runs the current query text in the current mode
    pub fn submit(&self, service: &QueryServiceHandle) {
        if let Some(run) = self.dispatch(service) {
            spawn_local(async move {
                run.await;
            });
        }
    }

    /// Drops whatever is in flight; called on teardown
    pub fn cancel_pending(&self) {
        let _ = self.runs.try_update_value(|runs| runs.cancel());
    }
}

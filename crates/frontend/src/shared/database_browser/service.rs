//! Query service wiring: context handle and the latency-simulating wrapper

use std::sync::Arc;

use contracts::shared::database_browser::{
    MockQueryService, QueryFuture, QueryRequest, QueryService,
};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;

/// Shared handle to the query service, stored in Leptos context
#[derive(Clone)]
pub struct QueryServiceHandle(Arc<dyn QueryService>);

impl QueryServiceHandle {
    pub fn new(service: impl QueryService + 'static) -> Self {
        Self(Arc::new(service))
    }

    pub fn run(&self, request: &QueryRequest) -> QueryFuture {
        self.0.run(request)
    }
}

/// Makes `service` available to every `DatabaseBrowser` below the current owner
pub fn provide_query_service(service: impl QueryService + 'static) {
    provide_context(QueryServiceHandle::new(service));
}

/// Service from context, or the sample-data service when none was provided
pub fn use_query_service() -> QueryServiceHandle {
    use_context::<QueryServiceHandle>().unwrap_or_else(|| {
        log!("No QueryService in context, answering with sample data");
        QueryServiceHandle::new(MockQueryService)
    })
}

/// Waits `delay_ms` before delegating to the wrapped service
pub struct DelayedQueryService {
    inner: Arc<dyn QueryService>,
    delay_ms: u32,
}

impl DelayedQueryService {
    pub fn new(inner: impl QueryService + 'static, delay_ms: u32) -> Self {
        Self {
            inner: Arc::new(inner),
            delay_ms,
        }
    }

    fn delayed(&self, pending: QueryFuture) -> QueryFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            pending.await
        })
    }
}

impl QueryService for DelayedQueryService {
    fn run_sql(&self, query: &str) -> QueryFuture {
        self.delayed(self.inner.run_sql(query))
    }

    fn run_natural_language(&self, query: &str) -> QueryFuture {
        self.delayed(self.inner.run_natural_language(query))
    }
}

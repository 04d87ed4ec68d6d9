//! Query service seam and run bookkeeping

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::query::{QueryMode, QueryRequest};
use super::result::ResultSet;

/// Errors a query service can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("could not translate question to SQL: {0}")]
    Translation(String),
    #[error("query execution failed: {0}")]
    Execution(String),
}

/// Future returned by a query service. Not `Send`: runs on the UI thread.
pub type QueryFuture = Pin<Box<dyn Future<Output = Result<ResultSet, QueryError>>>>;

/// Backend the query panel submits to.
///
/// Implementations must not borrow `query` past the call: the returned future
/// is `'static` and is polled after the submit handler returns.
pub trait QueryService: Send + Sync {
    fn run_sql(&self, query: &str) -> QueryFuture;

    fn run_natural_language(&self, query: &str) -> QueryFuture;

    /// Dispatches on the request mode.
    fn run(&self, request: &QueryRequest) -> QueryFuture {
        match request.mode {
            QueryMode::NaturalLanguage => self.run_natural_language(&request.text),
            QueryMode::Sql => self.run_sql(&request.text),
        }
    }
}

/// Identifier of a single submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryRunId(u64);

impl fmt::Display for QueryRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks which run is allowed to publish results.
///
/// Every `begin` supersedes the runs before it; `cancel` supersedes all of them.
#[derive(Debug, Default)]
pub struct QueryRunTracker {
    latest: u64,
    cancelled: bool,
}

impl QueryRunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> QueryRunId {
        self.latest += 1;
        self.cancelled = false;
        QueryRunId(self.latest)
    }

    pub fn is_current(&self, id: QueryRunId) -> bool {
        !self.cancelled && id.0 == self.latest
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

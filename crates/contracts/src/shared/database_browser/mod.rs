//! Data model shared by the database browser widget
//!
//! Everything here is plain Rust: table descriptors and their search filter,
//! query modes and requests, result rows with ordered columns, the
//! `QueryService` seam and the mock service with its fixed sample data.

pub mod query;
pub mod result;
pub mod sample;
pub mod service;
pub mod settings;
pub mod table;
pub mod view;

pub use query::{QueryMode, QueryRequest};
pub use result::{CellValue, ColumnLayout, ResultRow, ResultSet};
pub use sample::{sample_customers, sample_tables, MockQueryService};
pub use service::{QueryError, QueryFuture, QueryRunId, QueryRunTracker, QueryService};
pub use settings::BrowserSettings;
pub use table::{filter_tables, TableDescriptor};
pub use view::ResultView;

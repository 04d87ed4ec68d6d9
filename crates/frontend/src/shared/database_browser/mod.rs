//! Database browser widget: table list, query panel and results viewer

pub mod service;
pub mod ui;
pub mod view_model;

pub use service::{provide_query_service, use_query_service, DelayedQueryService, QueryServiceHandle};
pub use ui::DatabaseBrowser;
pub use view_model::DatabaseBrowserVm;

pub mod database_browser;

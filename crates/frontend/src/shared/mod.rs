pub mod components;
pub mod database_browser;
pub mod icons;
pub mod list_utils;

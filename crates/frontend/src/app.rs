use contracts::shared::database_browser::{sample_tables, BrowserSettings, MockQueryService};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::shared::database_browser::{provide_query_service, DatabaseBrowser, DelayedQueryService};

/// Id of the inline JSON element the host page may use to configure the browser
const SETTINGS_ELEMENT_ID: &str = "database-browser-settings";

/// Reads `BrowserSettings` from the host page, falling back to defaults
fn load_settings() -> BrowserSettings {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(json) if !json.trim().is_empty() => BrowserSettings::from_json(&json)
            .unwrap_or_else(|e| {
                log!("Invalid #{} settings, using defaults: {}", SETTINGS_ELEMENT_ID, e);
                BrowserSettings::default()
            }),
        _ => BrowserSettings::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let settings = load_settings();

    // Sample rows behind a short delay so the pending state is visible
    provide_query_service(DelayedQueryService::new(
        MockQueryService,
        settings.simulated_latency_ms,
    ));

    let tables = RwSignal::new(sample_tables());
    let on_select_table = Callback::new(move |name: String| {
        log!("Table selected: {}", name);
    });

    view! {
        <ConfigProvider>
            <DatabaseBrowser
                tables=tables
                on_select_table=on_select_table
                settings=settings
            />
        </ConfigProvider>
    }
}

use serde::{Deserialize, Serialize};

use super::query::QueryMode;
use super::result::ColumnLayout;

fn default_true() -> bool {
    true
}

fn default_latency_ms() -> u32 {
    350
}

fn default_search_placeholder() -> String {
    "Search tables...".to_string()
}

/// Host-supplied settings for the database browser. Every field has a default,
/// so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Tab selected when the widget mounts
    #[serde(default)]
    pub default_mode: QueryMode,

    /// Header derivation for the results table
    #[serde(default)]
    pub column_layout: ColumnLayout,

    /// Highlight the search term inside table names
    #[serde(default = "default_true")]
    pub highlight_matches: bool,

    /// Artificial delay applied by the demo service before answering
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u32,

    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            default_mode: QueryMode::default(),
            column_layout: ColumnLayout::default(),
            highlight_matches: true,
            simulated_latency_ms: default_latency_ms(),
            search_placeholder: default_search_placeholder(),
        }
    }
}

impl BrowserSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

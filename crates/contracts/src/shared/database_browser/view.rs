use serde::{Deserialize, Serialize};

/// How the results viewer presents the current result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultView {
    #[default]
    Table,
    /// Selectable, renders a placeholder
    Chart,
}

impl ResultView {
    pub const ALL: [ResultView; 2] = [ResultView::Table, ResultView::Chart];

    pub fn label(&self) -> &'static str {
        match self {
            ResultView::Table => "Table",
            ResultView::Chart => "Chart",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResultView::Table => "table",
            ResultView::Chart => "line-chart",
        }
    }
}

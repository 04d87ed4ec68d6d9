use serde::{Deserialize, Serialize};

/// Input mode of the query panel. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryMode {
    #[default]
    #[serde(rename = "natural")]
    NaturalLanguage,
    #[serde(rename = "sql")]
    Sql,
}

impl QueryMode {
    /// Modes in tab order
    pub const ALL: [QueryMode; 2] = [QueryMode::NaturalLanguage, QueryMode::Sql];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::NaturalLanguage => "natural",
            QueryMode::Sql => "sql",
        }
    }

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            QueryMode::NaturalLanguage => "Natural Language",
            QueryMode::Sql => "SQL Query",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            QueryMode::NaturalLanguage => "Ask a question about your data in plain English...",
            QueryMode::Sql => "Write your SQL query here...",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            QueryMode::NaturalLanguage => "Submit",
            QueryMode::Sql => "Run",
        }
    }

    /// Icon name understood by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            QueryMode::NaturalLanguage => "message-square",
            QueryMode::Sql => "code",
        }
    }
}

/// What the query panel hands to a `QueryService` on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub mode: QueryMode,
    pub text: String,
}

impl QueryRequest {
    pub fn new(mode: QueryMode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_natural_language() {
        assert_eq!(QueryMode::default(), QueryMode::NaturalLanguage);
        assert_eq!(QueryMode::ALL[0], QueryMode::default());
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&QueryMode::NaturalLanguage).unwrap(),
            r#""natural""#
        );
        let mode: QueryMode = serde_json::from_str(r#""sql""#).unwrap();
        assert_eq!(mode, QueryMode::Sql);
        assert_eq!(mode.as_str(), "sql");
    }

    #[test]
    fn test_submit_labels() {
        assert_eq!(QueryMode::NaturalLanguage.submit_label(), "Submit");
        assert_eq!(QueryMode::Sql.submit_label(), "Run");
    }
}

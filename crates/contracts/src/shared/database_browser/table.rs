use serde::{Deserialize, Serialize};

/// A table offered by the browser panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    pub name: String,
    pub row_count: u64,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, row_count: u64) -> Self {
        Self {
            name: name.into(),
            row_count,
        }
    }

    /// Case-insensitive substring match on the table name.
    /// An empty term matches every table.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Returns the tables whose name contains `term` (case-insensitive),
/// keeping the input order.
pub fn filter_tables(tables: &[TableDescriptor], term: &str) -> Vec<TableDescriptor> {
    tables
        .iter()
        .filter(|table| table.matches_search(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<TableDescriptor> {
        vec![
            TableDescriptor::new("customers", 1250),
            TableDescriptor::new("orders", 5432),
            TableDescriptor::new("Customer_Addresses", 980),
            TableDescriptor::new("products", 320),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_order() {
        let filtered = filter_tables(&tables(), "CUSTOMER");
        let names: Vec<&str> = filtered.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["customers", "Customer_Addresses"]);
    }

    #[test]
    fn test_empty_term_returns_everything() {
        assert_eq!(filter_tables(&tables(), ""), tables());
    }

    #[test]
    fn test_no_match_returns_empty_list() {
        assert!(filter_tables(&tables(), "invoices").is_empty());
    }

    #[test]
    fn test_empty_tables() {
        assert!(filter_tables(&[], "anything").is_empty());
        assert!(filter_tables(&[], "").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for term in ["", "o", "ER", "_add", "zzz"] {
            let once = filter_tables(&tables(), term);
            let twice = filter_tables(&once, term);
            assert_eq!(once, twice, "term {:?}", term);
        }
    }

    #[test]
    fn test_filter_matches_exact_definition() {
        let term = "Rs";
        let expected: Vec<TableDescriptor> = tables()
            .into_iter()
            .filter(|t| t.name.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        assert_eq!(filter_tables(&tables(), term), expected);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&TableDescriptor::new("orders", 7)).unwrap();
        assert_eq!(json, r#"{"name":"orders","rowCount":7}"#);

        let parsed: TableDescriptor =
            serde_json::from_str(r#"{"name":"payments","rowCount":42}"#).unwrap();
        assert_eq!(parsed, TableDescriptor::new("payments", 42));
    }
}

//! Fixed sample data and the mock query service built on it

use std::future;

use super::result::{ResultRow, ResultSet};
use super::service::{QueryFuture, QueryService};
use super::table::TableDescriptor;

const CUSTOMERS: [(i64, &str, &str, &str, &str, &str); 5] = [
    (1, "John Doe", "john@example.com", "555-1234", "123 Main St", "2023-01-15 09:30:00"),
    (2, "Jane Smith", "jane@example.com", "555-5678", "456 Oak Ave", "2023-01-16 14:20:00"),
    (3, "Bob Johnson", "bob@example.com", "555-9012", "789 Pine Rd", "2023-01-17 11:45:00"),
    (4, "Alice Brown", "alice@example.com", "555-3456", "101 Elm St", "2023-01-18 16:10:00"),
    (5, "Charlie Wilson", "charlie@example.com", "555-7890", "202 Maple Dr", "2023-01-19 10:05:00"),
];

/// Rows returned for a natural-language question
pub const NATURAL_LANGUAGE_ROWS: usize = 2;
/// Rows returned for a SQL query
pub const SQL_ROWS: usize = 5;

/// The first `count` customers of the sample `customers` table
pub fn sample_customers(count: usize) -> ResultSet {
    CUSTOMERS
        .iter()
        .take(count)
        .map(|&(id, name, email, phone, address, created_at)| {
            ResultRow::new()
                .with("customer_id", id)
                .with("name", name)
                .with("email", email)
                .with("phone", phone)
                .with("address", address)
                .with("created_at", created_at)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Tables shown by the demo app
pub fn sample_tables() -> Vec<TableDescriptor> {
    vec![
        TableDescriptor::new("customers", 1_250),
        TableDescriptor::new("orders", 5_432),
        TableDescriptor::new("order_items", 18_734),
        TableDescriptor::new("products", 320),
        TableDescriptor::new("inventory", 4_120),
        TableDescriptor::new("suppliers", 48),
        TableDescriptor::new("invoices", 5_101),
        TableDescriptor::new("payments", 4_987),
    ]
}

/// Query service that ignores the query text and answers with sample rows
#[derive(Debug, Clone, Copy, Default)]
pub struct MockQueryService;

impl QueryService for MockQueryService {
    fn run_sql(&self, _query: &str) -> QueryFuture {
        Box::pin(future::ready(Ok(sample_customers(SQL_ROWS))))
    }

    fn run_natural_language(&self, _query: &str) -> QueryFuture {
        Box::pin(future::ready(Ok(sample_customers(NATURAL_LANGUAGE_ROWS))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database_browser::query::{QueryMode, QueryRequest};
    use crate::shared::database_browser::result::{CellValue, ColumnLayout};
    use futures::executor::block_on;

    const KEYS: [&str; 6] = ["customer_id", "name", "email", "phone", "address", "created_at"];

    fn run(mode: QueryMode, text: &str) -> ResultSet {
        block_on(MockQueryService.run(&QueryRequest::new(mode, text))).unwrap()
    }

    #[test]
    fn test_natural_language_returns_two_rows_for_any_input() {
        for text in ["", "show me the newest customers", "DROP TABLE customers"] {
            let set = run(QueryMode::NaturalLanguage, text);
            assert_eq!(set.len(), 2, "input {:?}", text);
            for row in set.rows() {
                assert_eq!(row.columns().collect::<Vec<_>>(), KEYS);
            }
        }
    }

    #[test]
    fn test_sql_returns_five_rows_for_any_input() {
        for text in ["", "select * from customers", "not sql at all"] {
            let set = run(QueryMode::Sql, text);
            assert_eq!(set.len(), 5, "input {:?}", text);
            assert_eq!(set.columns(ColumnLayout::Union), KEYS);
            assert_eq!(set.columns(ColumnLayout::FirstRow), KEYS);
        }
    }

    #[test]
    fn test_sample_values() {
        let set = sample_customers(SQL_ROWS);
        let last = &set.rows()[4];
        assert_eq!(last.get("customer_id"), Some(&CellValue::Integer(5)));
        assert_eq!(last.get("name"), Some(&CellValue::Text("Charlie Wilson".into())));
        assert_eq!(
            last.get("created_at").map(ToString::to_string),
            Some("2023-01-19 10:05:00".to_string())
        );
    }

    #[test]
    fn test_natural_language_rows_are_a_prefix_of_sql_rows() {
        let nl = run(QueryMode::NaturalLanguage, "");
        let sql = run(QueryMode::Sql, "");
        assert_eq!(nl.rows(), &sql.rows()[..2]);
    }

    #[test]
    fn test_sample_count_is_capped() {
        assert_eq!(sample_customers(50).len(), 5);
        assert!(sample_customers(0).is_empty());
    }
}

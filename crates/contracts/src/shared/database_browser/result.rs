use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value in a result cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One result row: column name -> value, in insertion order.
///
/// Serializes as a JSON object whose key order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow {
    cells: IndexMap<String, CellValue>,
}

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ResultRow::insert`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Appends a column, or replaces the value in place when the column exists.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// How header columns are derived from the rows of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// Keys of the first row only; keys that appear later are not rendered
    FirstRow,
    /// Every key of every row, in first-seen order
    #[default]
    Union,
}

/// Rows returned by one query run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header columns for the given layout. Empty when there are no rows.
    pub fn columns(&self, layout: ColumnLayout) -> Vec<String> {
        match layout {
            ColumnLayout::FirstRow => self
                .rows
                .first()
                .map(|row| row.columns().map(str::to_string).collect())
                .unwrap_or_default(),
            ColumnLayout::Union => {
                let mut columns: Vec<String> = Vec::new();
                for row in &self.rows {
                    for name in row.columns() {
                        if !columns.iter().any(|c| c == name) {
                            columns.push(name.to_string());
                        }
                    }
                }
                columns
            }
        }
    }

    /// Cells of `row` aligned to `columns`; a missing column yields `Null`.
    pub fn aligned_cells(row: &ResultRow, columns: &[String]) -> Vec<CellValue> {
        columns
            .iter()
            .map(|column| row.get(column).cloned().unwrap_or(CellValue::Null))
            .collect()
    }
}

impl From<Vec<ResultRow>> for ResultSet {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> ResultSet {
        ResultSet::new(vec![
            ResultRow::new().with("id", 1_i64).with("name", "a"),
            ResultRow::new().with("name", "b").with("id", 2_i64).with("extra", true),
        ])
    }

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut row = ResultRow::new().with("b", 1_i64).with("a", 2_i64);
        row.insert("b", "x");
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(row.get("b"), Some(&CellValue::Text("x".into())));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_first_row_columns() {
        assert_eq!(ragged().columns(ColumnLayout::FirstRow), vec!["id", "name"]);
    }

    #[test]
    fn test_union_columns_in_first_seen_order() {
        assert_eq!(
            ragged().columns(ColumnLayout::Union),
            vec!["id", "name", "extra"]
        );
    }

    #[test]
    fn test_empty_set_has_no_columns() {
        let empty = ResultSet::default();
        assert!(empty.columns(ColumnLayout::Union).is_empty());
        assert!(empty.columns(ColumnLayout::FirstRow).is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_aligned_cells_follow_header_order() {
        let set = ragged();
        let columns = set.columns(ColumnLayout::Union);
        let first = ResultSet::aligned_cells(&set.rows()[0], &columns);
        let second = ResultSet::aligned_cells(&set.rows()[1], &columns);
        assert_eq!(first, vec![CellValue::Integer(1), "a".into(), CellValue::Null]);
        assert_eq!(second, vec![CellValue::Integer(2), "b".into(), CellValue::Bool(true)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Text("555-1234".into()).to_string(), "555-1234");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_row_serde_preserves_key_order() {
        let json = r#"{"zeta":1,"alpha":"x","mid":null,"ratio":0.5}"#;
        let row: ResultRow = serde_json::from_str(json).unwrap();
        assert_eq!(
            row.columns().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid", "ratio"]
        );
        assert_eq!(row.get("zeta"), Some(&CellValue::Integer(1)));
        assert_eq!(row.get("ratio"), Some(&CellValue::Number(0.5)));
        assert_eq!(row.get("mid"), Some(&CellValue::Null));
        assert_eq!(serde_json::to_string(&row).unwrap(), json);
    }

    #[test]
    fn test_set_serializes_as_array() {
        let set = ResultSet::new(vec![ResultRow::new().with("id", 7_i64)]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"[{"id":7}]"#);
    }
}

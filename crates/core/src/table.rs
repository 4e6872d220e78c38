//! Schema-free query result produced for one question.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered named columns plus row-major values, exactly as the engine
/// returned them. Lives for one request/render cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with exactly this name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn campaigns() -> ResultTable {
        ResultTable::new(
            vec!["campaign".to_owned(), "conversions".to_owned()],
            vec![
                vec![json!("spring_promo"), json!(12)],
                vec![json!("retargeting"), json!(7)],
                vec![json!("brand"), json!(3)],
            ],
        )
    }

    #[test]
    fn column_lookup_is_exact() {
        let table = campaigns();
        assert_eq!(table.column_index("conversions"), Some(1));
        assert!(table.has_column("campaign"));
        assert!(!table.has_column("Campaign"));
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = ResultTable::new(vec!["touches".to_owned()], Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}

use serde::Serialize;
use subintel_core::{ResultTable, group_thousands};

/// A generated query the store refused to run, with the SQL that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFailure {
    pub sql: String,
    pub message: String,
}

/// How executing the generated SQL went.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryStatus {
    Success { table: ResultTable },
    Empty { columns: Vec<String> },
    Failed { error: QueryFailure },
}

/// Result of one question. The SQL is always present once synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub question: String,
    pub sql: String,
    #[serde(flatten)]
    pub status: QueryStatus,
}

impl QueryOutcome {
    /// Rows returned, zero unless the query succeeded.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.status {
            QueryStatus::Success { table } => table.row_count(),
            QueryStatus::Empty { .. } | QueryStatus::Failed { .. } => 0,
        }
    }

    #[must_use]
    pub const fn table(&self) -> Option<&ResultTable> {
        match &self.status {
            QueryStatus::Success { table } => Some(table),
            QueryStatus::Empty { .. } | QueryStatus::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, QueryStatus::Success { .. })
    }

    /// User-facing status text.
    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.status {
            QueryStatus::Success { table } => {
                format!("Success – {} rows", group_thousands(&table.row_count().to_string()))
            },
            QueryStatus::Empty { .. } => "No results – try different wording".to_owned(),
            QueryStatus::Failed { error } => format!("Query error: {}", error.message),
        }
    }
}

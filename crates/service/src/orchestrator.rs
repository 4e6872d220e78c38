use std::sync::Arc;

use subintel_core::JourneyRow;
use subintel_llm::SqlSynthesizer;
use subintel_storage::{AnalyticalStore, StorageError, StoreStats, TableSchema};

use crate::ServiceError;
use crate::outcome::{QueryFailure, QueryOutcome, QueryStatus};

/// Runs a question end to end: synthesize, execute, classify.
///
/// Holds the single read-only store handle for the process.
pub struct Orchestrator {
    synthesizer: Arc<dyn SqlSynthesizer>,
    store: Arc<AnalyticalStore>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(synthesizer: Arc<dyn SqlSynthesizer>, store: Arc<AnalyticalStore>) -> Self {
        Self { synthesizer, store }
    }

    /// Answers one question.
    ///
    /// The generated SQL is executed exactly as returned. Execution errors
    /// and empty results come back as an `Ok` outcome; only a failed model
    /// call is an `Err`.
    pub async fn run(&self, question: &str) -> Result<QueryOutcome, ServiceError> {
        let sql = self.synthesizer.synthesize(question).await?;

        let store = Arc::clone(&self.store);
        let query = sql.clone();
        let status = match tokio::task::spawn_blocking(move || store.execute(&query)).await {
            Ok(Ok(table)) if table.is_empty() => QueryStatus::Empty { columns: table.columns },
            Ok(Ok(table)) => QueryStatus::Success { table },
            Ok(Err(e)) => {
                let failed_sql = e.sql().unwrap_or(&sql).to_owned();
                tracing::warn!(sql = %failed_sql, "generated query failed: {}", e.engine_message());
                QueryStatus::Failed {
                    error: QueryFailure { sql: failed_sql, message: e.engine_message() },
                }
            },
            Err(e) => {
                tracing::warn!(sql = %sql, "query task failed: {e}");
                QueryStatus::Failed {
                    error: QueryFailure { sql: sql.clone(), message: e.to_string() },
                }
            },
        };

        let outcome = QueryOutcome { question: question.to_owned(), sql, status };
        tracing::info!(rows = outcome.row_count(), "answered question: {question}");
        Ok(outcome)
    }

    pub async fn schema(&self) -> Result<Vec<TableSchema>, ServiceError> {
        self.blocking(|store| store.describe_schema()).await
    }

    pub async fn stats(&self) -> Result<StoreStats, ServiceError> {
        self.blocking(|store| store.stats()).await
    }

    /// Journey summary rows, shortest journeys first.
    pub async fn journey(&self) -> Result<Vec<JourneyRow>, ServiceError> {
        self.blocking(|store| store.journey()).await
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&AnalyticalStore) -> Result<T, StorageError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        Ok(tokio::task::spawn_blocking(move || f(&store)).await??)
    }
}

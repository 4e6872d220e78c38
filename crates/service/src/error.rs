//! Typed error enum for the service layer.

use subintel_llm::LlmError;
use subintel_storage::StorageError;
use thiserror::Error;

/// Failures that end a single question without producing an outcome.
///
/// A generated query that fails to execute is not one of these: it is
/// reported inside [`crate::QueryOutcome`] together with its SQL.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The model call failed.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// The store could not serve a metadata request.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes: a generated query that the
//! engine rejected (carrying the SQL text) is distinct from the store
//! itself being unusable.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection / DDL / transaction failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A read query was rejected by the engine (syntax, unknown column,
    /// type mismatch, write attempt on the read-only connection).
    #[error("query failed: {source}")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A source table the operation depends on does not exist yet.
    #[error("missing table `{table}`: {hint}")]
    MissingTable { table: &'static str, hint: &'static str },

    /// CSV input could not be read or deserialized.
    #[error("failed to import {}: {source}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the store connection.
    #[error("store connection lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Engine message for a rejected query, without the wrapper prefix.
    #[must_use]
    pub fn engine_message(&self) -> String {
        match self {
            Self::Query { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }

    /// SQL text attached to a rejected query.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Query { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

//! Storage layer for subintel
//!
//! Embedded SQLite file holding the impression facts, the derived journey
//! summary and the imported Markov summary. Preparation runs read-write;
//! question answering only ever sees a read-only connection.

mod error;
mod import;
mod schema;
mod store;

pub use error::StorageError;
pub use import::{
    import_impressions, import_impressions_from_reader, import_markov, import_markov_from_reader,
};
pub use store::{
    AnalyticalStore, ColumnInfo, StoreStats, TableSchema, ensure_source_tables, rebuild_journey,
};

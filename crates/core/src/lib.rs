//! Core types for the subscription intelligence dashboard.
//!
//! Holds the data model shared by the store, the synthesizer, the
//! orchestrator and both presentation surfaces (HTTP dashboard and CLI).

pub mod chart;
pub mod constants;
pub mod env_config;
pub mod format;
pub mod model;
mod sql_utils;
pub mod table;

pub use chart::{ChartKind, ChartOptions, ChartPoint, ChartSpec, select_charts};
pub use constants::*;
pub use env_config::{env_flag, env_parse_with_default};
pub use format::{ColumnRole, FormattedTable, format_cell, format_table, group_thousands};
pub use model::{ImpressionRecord, JourneyRow, MarkovRecord};
pub use sql_utils::strip_sql_fences;
pub use table::ResultTable;

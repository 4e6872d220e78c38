//! The analytical store handle.
//!
//! Write access happens only in the free functions that prepare the file
//! (`ensure_source_tables`, imports, `rebuild_journey`). Everything a user
//! question can reach goes through [`AnalyticalStore`], which holds a
//! read-only connection.

#![allow(
    clippy::as_conversions,
    clippy::cast_sign_loss,
    reason = "SQLite COUNT(*) results are non-negative"
)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Batch, Connection, OpenFlags, Statement, params};
use serde::Serialize;
use serde_json::{Number, Value};
use subintel_core::{
    FACT_IMPRESSIONS_TABLE, JOURNEY_TABLE, JourneyRow, MARKOV_SUMMARY_TABLE, ResultTable,
};

use crate::error::StorageError;
use crate::schema::{JOURNEY_REBUILD_SQL, SOURCE_TABLES_DDL};

/// Column of a table as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

/// Row counts of the three dataset tables. Missing tables count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub impressions: u64,
    pub journey_rows: u64,
    pub markov_rows: u64,
}

/// Single owner of the read-only connection, built once per process and
/// shared by reference (`Arc`) with everything that executes queries.
#[derive(Debug)]
pub struct AnalyticalStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

/// Open the file read-write, creating it if needed.
pub(crate) fn open_read_write(path: &Path) -> Result<Connection, StorageError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Connection::open(path)?)
}

/// Create the source tables if they do not exist yet.
///
/// # Errors
/// Returns error if the file cannot be opened or the DDL fails.
pub fn ensure_source_tables(path: &Path) -> Result<(), StorageError> {
    let conn = open_read_write(path)?;
    conn.execute_batch(SOURCE_TABLES_DDL)?;
    Ok(())
}

/// Rebuild the `journey` table from `fact_impressions`, replacing it wholesale.
///
/// Returns the number of journey rows (distinct touch counts).
///
/// # Errors
/// Returns `MissingTable` if no impressions were imported, or a database
/// error if the rebuild transaction fails.
pub fn rebuild_journey(path: &Path) -> Result<usize, StorageError> {
    let mut conn = open_read_write(path)?;
    if !table_exists(&conn, FACT_IMPRESSIONS_TABLE)? {
        return Err(StorageError::MissingTable {
            table: FACT_IMPRESSIONS_TABLE,
            hint: "import impression records first (`subintel import --impressions <csv>`)",
        });
    }

    let tx = conn.transaction()?;
    tx.execute_batch(JOURNEY_REBUILD_SQL)?;
    let rows = count_rows(&tx, JOURNEY_TABLE)?;
    tx.commit()?;

    tracing::info!(path = %path.display(), journey_rows = rows, "journey table rebuilt");
    Ok(rows as usize)
}

impl AnalyticalStore {
    /// Rebuild the derived journey table, then reopen the file read-only.
    ///
    /// # Errors
    /// Returns error if the rebuild fails or the file cannot be reopened.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        rebuild_journey(path)?;
        Self::open_read_only(path)
    }

    /// Open an existing store read-only without touching its contents.
    ///
    /// # Errors
    /// Returns error if the file does not exist or cannot be opened.
    pub fn open_read_only(path: &Path) -> Result<Self, StorageError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        tracing::debug!(path = %path.display(), "analytical store opened read-only");
        Ok(Self { conn: Mutex::new(conn), path: path.to_path_buf() })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Execute SQL text verbatim and collect every row.
    ///
    /// Every statement in the text runs in order and the rows of the last
    /// one are returned. No validation happens here: whatever the engine
    /// rejects comes back as `StorageError::Query` with the SQL attached.
    ///
    /// # Errors
    /// Returns `Query` if preparing, running or decoding fails.
    pub fn execute(&self, sql: &str) -> Result<ResultTable, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        run_query(&conn, sql).map_err(|source| StorageError::Query { sql: sql.to_owned(), source })
    }

    /// Tables and views with their columns, in name order.
    ///
    /// # Errors
    /// Returns error if the catalog cannot be read.
    pub fn describe_schema(&self) -> Result<Vec<TableSchema>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        names
            .into_iter()
            .map(|name| -> Result<TableSchema, StorageError> {
                let columns = table_columns(&conn, &name)?;
                Ok(TableSchema { name, columns })
            })
            .collect()
    }

    /// The journey summary as typed rows, shortest journeys first.
    ///
    /// # Errors
    /// Returns error if the journey table is missing or has unexpected types.
    pub fn journey(&self) -> Result<Vec<JourneyRow>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let mut stmt = conn.prepare(
            "SELECT touches, users, converters, conversion_rate_pct, avg_ltv \
             FROM journey ORDER BY touches",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(JourneyRow {
                    touches: row.get(0)?,
                    users: row.get(1)?,
                    converters: row.get(2)?,
                    conversion_rate_pct: row.get(3)?,
                    avg_ltv: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// # Errors
    /// Returns error if a count query fails.
    pub fn stats(&self) -> Result<StoreStats, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(StoreStats {
            impressions: count_if_exists(&conn, FACT_IMPRESSIONS_TABLE)?,
            journey_rows: count_if_exists(&conn, JOURNEY_TABLE)?,
            markov_rows: count_if_exists(&conn, MARKOV_SUMMARY_TABLE)?,
        })
    }
}

fn run_query(conn: &Connection, sql: &str) -> rusqlite::Result<ResultTable> {
    let mut batch = Batch::new(conn, sql);
    let mut last = ResultTable::new(Vec::new(), Vec::new());
    while let Some(mut stmt) = batch.next()? {
        last = collect_rows(&mut stmt)?;
    }
    Ok(last)
}

fn collect_rows(stmt: &mut Statement<'_>) -> rusqlite::Result<ResultTable> {
    let columns: Vec<String> = stmt.column_names().iter().map(ToString::to_string).collect();
    let width = columns.len();

    let mut rows = stmt.query([])?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let mut record = Vec::with_capacity(width);
        for index in 0..width {
            record.push(json_value_from_sql(row.get::<_, SqlValue>(index)?));
        }
        records.push(record);
    }

    Ok(ResultTable::new(columns, records))
}

fn json_value_from_sql(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(number) => Value::Number(Number::from(number)),
        SqlValue::Real(number) => Number::from_f64(number).map_or(Value::Null, Value::Number),
        SqlValue::Text(text) => Value::String(text),
        SqlValue::Blob(bytes) => Value::String(format!("<{} bytes>", bytes.len())),
    }
}

fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn count_rows(conn: &Connection, table: &str) -> rusqlite::Result<u64> {
    let count: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| row.get(0))?;
    Ok(count as u64)
}

fn count_if_exists(conn: &Connection, table: &str) -> rusqlite::Result<u64> {
    if table_exists(conn, table)? { count_rows(conn, table) } else { Ok(0) }
}

fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{}\")", table.replace('"', "\"\"")))?;
    let columns = stmt
        .query_map([], |row| Ok(ColumnInfo { name: row.get(1)?, data_type: row.get(2)? }))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

//! CSV import of the externally sourced tables.
//!
//! Each import replaces the table's rows inside one transaction, so a
//! malformed line leaves the previous contents in place.

use std::io::Read;
use std::path::Path;

use rusqlite::params;
use subintel_core::{ImpressionRecord, MarkovRecord};

use crate::error::StorageError;
use crate::schema::{INSERT_IMPRESSION_SQL, INSERT_MARKOV_SQL, SOURCE_TABLES_DDL};
use crate::store::open_read_write;

/// Replace `fact_impressions` with the rows of a headered CSV file.
///
/// # Errors
/// Returns `Import` if the file cannot be read or a row does not
/// deserialize, or a database error if the insert transaction fails.
pub fn import_impressions(db_path: &Path, csv_path: &Path) -> Result<usize, StorageError> {
    let reader = open_csv(csv_path)?;
    import_impressions_from_reader(db_path, reader, csv_path)
}

/// Same as [`import_impressions`] for an already open reader; `origin`
/// only labels errors.
///
/// # Errors
/// See [`import_impressions`].
pub fn import_impressions_from_reader<R: Read>(
    db_path: &Path,
    input: R,
    origin: &Path,
) -> Result<usize, StorageError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut conn = open_read_write(db_path)?;
    conn.execute_batch(SOURCE_TABLES_DDL)?;

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM fact_impressions", [])?;
    let mut inserted = 0_usize;
    {
        let mut stmt = tx.prepare(INSERT_IMPRESSION_SQL)?;
        for record in reader.deserialize::<ImpressionRecord>() {
            let record = record.map_err(|source| import_error(origin, source))?;
            stmt.execute(params![
                record.user_id,
                record.campaign,
                record.click_pos,
                record.conversion,
                record.revenue,
                record.plan,
            ])?;
            inserted += 1;
        }
    }
    tx.commit()?;

    tracing::info!(origin = %origin.display(), rows = inserted, "imported impression records");
    Ok(inserted)
}

/// Replace `markov_summary` with the rows of a headered CSV file.
///
/// # Errors
/// Returns `Import` if the file cannot be read or a row does not
/// deserialize, or a database error if the insert transaction fails.
pub fn import_markov(db_path: &Path, csv_path: &Path) -> Result<usize, StorageError> {
    let reader = open_csv(csv_path)?;
    import_markov_from_reader(db_path, reader, csv_path)
}

/// # Errors
/// See [`import_markov`].
pub fn import_markov_from_reader<R: Read>(
    db_path: &Path,
    input: R,
    origin: &Path,
) -> Result<usize, StorageError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut conn = open_read_write(db_path)?;
    conn.execute_batch(SOURCE_TABLES_DDL)?;

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM markov_summary", [])?;
    let mut inserted = 0_usize;
    {
        let mut stmt = tx.prepare(INSERT_MARKOV_SQL)?;
        for record in reader.deserialize::<MarkovRecord>() {
            let record = record.map_err(|source| import_error(origin, source))?;
            stmt.execute(params![
                record.channel_name,
                record.click,
                record.original_conversions,
                record.original_conversion_rate,
                record.total_conversions,
                record.attributed_conversion_rate,
                record.total_revenue,
            ])?;
            inserted += 1;
        }
    }
    tx.commit()?;

    tracing::info!(origin = %origin.display(), rows = inserted, "imported markov summary");
    Ok(inserted)
}

fn open_csv(csv_path: &Path) -> Result<std::fs::File, StorageError> {
    std::fs::File::open(csv_path).map_err(|err| import_error(csv_path, csv::Error::from(err)))
}

fn import_error(origin: &Path, source: csv::Error) -> StorageError {
    StorageError::Import { path: origin.to_path_buf(), source }
}

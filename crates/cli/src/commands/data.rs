use anyhow::Result;
use std::path::Path;

use subintel_core::EXAMPLE_QUESTIONS;
use subintel_storage::{
    AnalyticalStore, ensure_source_tables, import_impressions, import_markov, rebuild_journey,
};

use crate::require_existing;

pub(crate) fn run_init(db_path: &Path) -> Result<()> {
    ensure_source_tables(db_path)?;
    let journey_rows = rebuild_journey(db_path)?;
    println!("Initialized {} ({journey_rows} journey rows)", db_path.display());
    Ok(())
}

pub(crate) fn run_import(
    db_path: &Path,
    impressions: Option<&Path>,
    markov: Option<&Path>,
) -> Result<()> {
    if impressions.is_none() && markov.is_none() {
        anyhow::bail!("nothing to import: pass --impressions <csv> and/or --markov <csv>");
    }
    if let Some(csv) = impressions {
        let rows = import_impressions(db_path, csv)?;
        println!("Imported {rows} impression rows from {}", csv.display());
    }
    if let Some(csv) = markov {
        let rows = import_markov(db_path, csv)?;
        println!("Imported {rows} markov rows from {}", csv.display());
    }
    ensure_source_tables(db_path)?;
    let journey_rows = rebuild_journey(db_path)?;
    println!("Rebuilt journey table ({journey_rows} rows)");
    Ok(())
}

pub(crate) fn run_schema(db_path: &Path) -> Result<()> {
    require_existing(db_path)?;
    let store = AnalyticalStore::open_read_only(db_path)?;
    for table in store.describe_schema()? {
        println!("{}", table.name);
        for column in table.columns {
            println!("  {} {}", column.name, column.data_type);
        }
    }
    Ok(())
}

pub(crate) fn run_stats(db_path: &Path) -> Result<()> {
    require_existing(db_path)?;
    let store = AnalyticalStore::open_read_only(db_path)?;
    let stats = store.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    if stats.journey_rows > 0 {
        println!("\ntouches  users  converters  conversion_rate_pct  avg_ltv");
        for row in store.journey()? {
            println!(
                "{:>7}  {:>5}  {:>10}  {:>19}  {:>7}",
                row.touches, row.users, row.converters, row.conversion_rate_pct, row.avg_ltv
            );
        }
    }
    Ok(())
}

pub(crate) fn run_examples() {
    for question in EXAMPLE_QUESTIONS {
        println!("{question}");
    }
}

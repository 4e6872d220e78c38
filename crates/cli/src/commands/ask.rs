use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use subintel_core::{ChartOptions, format_table};
use subintel_http::build_ask_response;
use subintel_service::Orchestrator;
use subintel_storage::AnalyticalStore;

use crate::render::render_table;
use crate::{build_synthesizer, require_existing};

pub(crate) async fn run(
    db_path: &Path,
    question: &str,
    json: bool,
    journey_chart: bool,
) -> Result<()> {
    let synthesizer = Arc::new(build_synthesizer()?);
    require_existing(db_path)?;
    let store = Arc::new(AnalyticalStore::open(db_path)?);
    let orchestrator = Orchestrator::new(synthesizer, store);

    let outcome = orchestrator.run(question).await?;

    if json {
        let response = build_ask_response(&outcome, &ChartOptions { journey_chart });
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}\n", outcome.sql);
    println!("{}", outcome.status_line());
    if let Some(table) = outcome.table() {
        println!();
        print!("{}", render_table(&format_table(table)));
    }
    Ok(())
}

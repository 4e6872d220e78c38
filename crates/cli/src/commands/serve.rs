use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use subintel_http::{AppState, Settings, create_router};
use subintel_service::Orchestrator;
use subintel_storage::AnalyticalStore;

use crate::{build_synthesizer, require_existing};

pub(crate) async fn run(
    db_path: &Path,
    port: u16,
    host: String,
    journey_chart: bool,
) -> Result<()> {
    let synthesizer = Arc::new(build_synthesizer()?);
    require_existing(db_path)?;
    let store = Arc::new(AnalyticalStore::open(db_path)?);
    tracing::info!(path = %store.path().display(), "analytical store ready");
    let orchestrator = Arc::new(Orchestrator::new(synthesizer, store));

    let state = Arc::new(AppState::new(orchestrator, Settings { journey_chart }));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use subintel_core::{EXAMPLE_QUESTIONS, JourneyRow};
use subintel_storage::{StoreStats, TableSchema};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::ExamplesResponse;

pub async fn examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        questions: EXAMPLE_QUESTIONS.iter().map(|q| (*q).to_owned()).collect(),
    })
}

pub async fn schema(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TableSchema>>, ApiError> {
    Ok(Json(state.orchestrator.schema().await?))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StoreStats>, ApiError> {
    Ok(Json(state.orchestrator.stats().await?))
}

pub async fn journey(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JourneyRow>>, ApiError> {
    Ok(Json(state.orchestrator.journey().await?))
}

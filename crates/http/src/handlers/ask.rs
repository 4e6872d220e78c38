use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{AskRequest, AskResponse};
use crate::view::build_ask_response;

/// Answer one question. Query failures and empty results are still 200;
/// only a blank question or a failed model call is an HTTP error.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_owned()));
    }

    let outcome = state.orchestrator.run(question).await?;
    let options = state.settings.read().await.chart_options();
    Ok(Json(build_ask_response(&outcome, &options)))
}

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::AppState;
use crate::api_types::{Settings, UpdateSettingsRequest};

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(*state.settings.read().await)
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Json<Settings> {
    let mut settings = state.settings.write().await;
    if let Some(journey_chart) = req.journey_chart {
        settings.journey_chart = journey_chart;
        tracing::info!(journey_chart, "dashboard settings updated");
    }
    Json(*settings)
}

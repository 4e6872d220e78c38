//! Request and response bodies for the JSON API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use subintel_core::{ChartOptions, ChartSpec, FormattedTable};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Outcome category shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskStatus {
    Success,
    Empty,
    Error,
}

/// Everything the dashboard needs to render one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub request_id: String,
    pub question: String,
    /// Always present, whatever happened when it ran.
    pub sql: String,
    pub status: AskStatus,
    pub message: String,
    pub row_count: usize,
    pub charts: Vec<ChartSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<FormattedTable>,
    pub generated_at: DateTime<Utc>,
}

/// Runtime-configurable dashboard settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub journey_chart: bool,
}

impl Settings {
    #[must_use]
    pub const fn chart_options(&self) -> ChartOptions {
        ChartOptions { journey_chart: self.journey_chart }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub journey_chart: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
    pub prompt_version: u32,
}

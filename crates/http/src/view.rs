//! Turns an orchestrator outcome into the view the dashboard renders.

use chrono::Utc;
use subintel_core::{ChartOptions, format_table, select_charts};
use subintel_service::{QueryOutcome, QueryStatus};
use uuid::Uuid;

use crate::api_types::{AskResponse, AskStatus};

/// Charts and formatted table for a successful outcome; status text for all.
#[must_use]
pub fn build_ask_response(outcome: &QueryOutcome, options: &ChartOptions) -> AskResponse {
    let (status, charts, table) = match &outcome.status {
        QueryStatus::Success { table } => {
            (AskStatus::Success, select_charts(table, options), Some(format_table(table)))
        },
        QueryStatus::Empty { .. } => (AskStatus::Empty, Vec::new(), None),
        QueryStatus::Failed { .. } => (AskStatus::Error, Vec::new(), None),
    };

    AskResponse {
        request_id: Uuid::new_v4().to_string(),
        question: outcome.question.clone(),
        sql: outcome.sql.clone(),
        status,
        message: outcome.status_line(),
        row_count: outcome.row_count(),
        charts,
        table,
        generated_at: Utc::now(),
    }
}

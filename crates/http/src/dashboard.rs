//! Dashboard UI: one embedded HTML page served at `/`.
//!
//! The page posts questions to `/api/ask` and renders the SQL, the status
//! line, SVG charts from the returned chart specs and the formatted table.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

pub async fn serve_dashboard() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(DASHBOARD_HTML))
        .into_response()
}

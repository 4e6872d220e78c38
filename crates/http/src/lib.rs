//! HTTP dashboard and JSON API for subintel.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod dashboard;
mod handlers;
mod view;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use subintel_service::Orchestrator;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub use api_types::{
    AskRequest, AskResponse, AskStatus, ExamplesResponse, Settings, UpdateSettingsRequest,
    VersionResponse,
};
pub use view::build_ask_response;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Question pipeline; owns the read-only store handle.
    pub orchestrator: Arc<Orchestrator>,
    /// Runtime-configurable settings
    pub settings: RwLock<Settings>,
}

impl AppState {
    #[must_use]
    pub fn new(orchestrator: Arc<Orchestrator>, settings: Settings) -> Self {
        Self { orchestrator, settings: RwLock::new(settings) }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::serve_dashboard))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/ask", post(handlers::ask::ask))
        .route("/api/examples", get(handlers::meta::examples))
        .route("/api/schema", get(handlers::meta::schema))
        .route("/api/stats", get(handlers::meta::stats))
        .route("/api/journey", get(handlers::meta::journey))
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).post(handlers::settings::update_settings),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        prompt_version: subintel_llm::PROMPT_VERSION,
    })
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness check; fixed confirmation string.
pub async fn index_handler() -> &'static str {
    "Resume Matcher API is running"
}

/// GET /health
/// Returns a status object with service version and corpus size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-matcher-api",
        "jobs": state.corpus.len()
    }))
}

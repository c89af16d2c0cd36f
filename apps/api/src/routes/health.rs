use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and active matcher.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumecraft",
        "job_matcher": state.job_matcher.backend(),
        "generation_delay_ms": state.config.generation_delay.as_millis() as u64,
    }))
}

//! Progress polling endpoint.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::app::AppState;

/// Current state of a run. Unknown keys read as a run that has not
/// started, so pollers never need to special-case 404s.
pub async fn progress(State(state): State<AppState>, Path(key): Path<String>) -> Json<Value> {
    let snapshot = state.registry.snapshot(&key);
    Json(json!({
        "percent": snapshot.percent,
        "done": snapshot.done,
        "resultArtifact": snapshot.artifact,
        "error": snapshot.error,
    }))
}

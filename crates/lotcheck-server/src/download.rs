//! Artifact download endpoint.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app::AppState;
use crate::upload::safe_download_name;

/// Serves a previously produced artifact from the export directory.
/// Names with path separators or `..` are rejected outright.
pub async fn download(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    if !safe_download_name(&name) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = state.options.export_dir.join(&name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let headers = [
                ("Content-Type", content_type(&name).to_string()),
                (
                    "Content-Disposition",
                    format!("attachment; filename=\"{name}\""),
                ),
            ];
            (headers, Body::from(bytes)).into_response()
        }
        Err(err) => {
            tracing::debug!(name, error = %err, "artifact not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn content_type(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        "text/csv"
    } else if lower.ends_with(".xlsx") {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    } else if lower.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

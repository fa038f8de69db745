//! Upload-and-validate endpoint.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lotcheck::Runner;
use serde_json::json;

use crate::app::AppState;
use crate::upload::{allowed_extension, is_pdf, sanitize_filename};

/// Accepts a multipart upload under the `file` field, stores it, and
/// starts an asynchronous validation run. Responds immediately with the
/// progress key the client polls.
pub async fn validate(State(state): State<AppState>, multipart: Multipart) -> Response {
    match handle(state, multipart).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "validate: request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

async fn handle(state: AppState, mut multipart: Multipart) -> anyhow::Result<Response> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let name = match field.file_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => {
                    return Ok(bad_request("missing filename"));
                }
            };
            let bytes = field.bytes().await?;
            upload = Some((name, bytes));
            break;
        }
    }

    let Some((original_name, bytes)) = upload else {
        return Ok(bad_request("no file part in request"));
    };
    if !allowed_extension(&original_name) {
        return Ok(bad_request("unsupported file type"));
    }

    let stored_name = sanitize_filename(&original_name);
    tokio::fs::create_dir_all(&state.upload_dir).await?;
    let stored_path = state.upload_dir.join(&stored_name);
    tokio::fs::write(&stored_path, &bytes).await?;

    let key = state.registry.create();
    tracing::info!(key, file = %stored_name, "accepted upload");

    let runner = Runner::new(
        state.registry.clone(),
        state.recognizer.clone(),
        state.options.clone(),
    );
    let run_key = key.clone();
    tokio::task::spawn_blocking(move || {
        let result = if is_pdf(&stored_name) {
            runner.run(&stored_path, &run_key).map(|_| ())
        } else {
            runner.run_passthrough(&stored_path, &run_key).map(|_| ())
        };
        if let Err(err) = result {
            tracing::warn!(key = run_key, error = %err, "run ended in failure");
        }
    });

    Ok(Json(json!({ "progressKey": key })).into_response())
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

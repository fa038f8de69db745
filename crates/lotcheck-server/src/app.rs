//! Router and shared state.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use lotcheck::ocr::TextRecognizer;
use lotcheck::{ProgressRegistry, RunOptions};

use crate::{download, progress, validate};

#[derive(Clone)]
pub struct AppState {
    pub registry: ProgressRegistry,
    pub recognizer: Arc<dyn TextRecognizer>,
    pub options: RunOptions,
    pub upload_dir: PathBuf,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/validate", post(validate::validate))
        .route("/api/progress/{key}", get(progress::progress))
        .route("/download/{name}", get(download::download))
        .with_state(state)
}

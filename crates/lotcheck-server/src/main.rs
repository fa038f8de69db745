mod app;
mod download;
mod progress;
mod upload;
mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lotcheck::ocr::TextRecognizer;
use lotcheck::{NullRecognizer, ProgressRegistry, RunOptions, TesseractCli};

/// HTTP service wrapping the lotcheck validation engine.
#[derive(Debug, Parser)]
#[command(name = "lotcheck-server", about, version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,

    /// Directory where uploads are stored
    #[arg(long, default_value = "uploads")]
    upload_dir: PathBuf,

    /// Directory where artifacts are written and served from
    #[arg(long, default_value = "exports")]
    export_dir: PathBuf,

    /// Raster resolution for scanned pages (clamped to 150-300)
    #[arg(long, default_value_t = 300)]
    ocr_dpi: u32,

    /// Skip recognition on scanned pages; their fields read as missing
    #[arg(long)]
    no_ocr: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lotcheck=info,lotcheck_server=info".into()),
        )
        .init();

    let args = Args::parse();

    let recognizer: Arc<dyn TextRecognizer> = if args.no_ocr {
        Arc::new(NullRecognizer)
    } else {
        Arc::new(TesseractCli::new())
    };
    let state = app::AppState {
        registry: ProgressRegistry::new(),
        recognizer,
        options: RunOptions {
            ocr_dpi: args.ocr_dpi,
            export_dir: args.export_dir,
        },
        upload_dir: args.upload_dir,
    };

    tokio::fs::create_dir_all(&state.upload_dir)
        .await
        .context("could not create upload dir")?;
    tokio::fs::create_dir_all(&state.options.export_dir)
        .await
        .context("could not create export dir")?;

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("could not bind {}", args.bind))?;
    tracing::info!(addr = %args.bind, "listening");
    axum::serve(listener, app::router(state))
        .await
        .context("server error")?;
    Ok(())
}

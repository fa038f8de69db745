use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Validate QA traceability paperwork against a field checklist.
#[derive(Debug, Parser)]
#[command(name = "lotcheck", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a paperwork PDF and write summary artifacts
    Validate {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory receiving the summary CSV/XLSX and dashboard PNG
        #[arg(long, default_value = "exports")]
        export_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Raster resolution for scanned pages (clamped to 150-300)
        #[arg(long, default_value_t = 300)]
        ocr_dpi: u32,

        /// Skip recognition on scanned pages; their fields read as missing
        #[arg(long)]
        no_ocr: bool,
    },

    /// Print the checklist, numeric ranges, and identity fields
    Fields {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

mod cli;
mod fields_cmd;
mod validate_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Validate {
            ref file,
            ref export_dir,
            ref format,
            ocr_dpi,
            no_ocr,
        } => validate_cmd::run(file, export_dir, format, ocr_dpi, no_ocr),
        cli::Commands::Fields { ref format } => fields_cmd::run(format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

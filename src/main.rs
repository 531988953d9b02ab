//! Marquee - box office dashboard
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use marquee_core::prelude::*;

/// Marquee - box office dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Box office dashboard for a JSON film dataset", long_about = None)]
struct Args {
    /// Path to the film dataset (JSON array)
    #[arg(value_name = "PATH", default_value = "films.json")]
    path: PathBuf,

    /// Write a static HTML dashboard to FILE and exit
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Settings file (default: .marquee/config.toml next to the dataset)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    marquee_core::logging::init()?;

    let settings = marquee::resolve_settings(&args.path, args.config.as_deref())
        .context("Failed to load settings")?;

    let result = match args.export {
        Some(output) => marquee::export_dashboard(&args.path, &output, &settings)
            .context("HTML export failed")
            .map(|summary| {
                println!(
                    "Exported {} films to {}",
                    summary.films,
                    summary.output.display()
                );
            }),
        None => marquee::run_dashboard(args.path, settings).await,
    };

    if result.is_err() {
        if let Ok(log_file) = marquee_core::logging::get_current_log_file() {
            eprintln!("Details in {}", log_file.display());
        }
    }
    result
}

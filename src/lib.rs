//! Marquee Library
//!
//! Box office dashboard for the terminal, with a static HTML export.

pub mod export;

use std::path::{Path, PathBuf};

use marquee_app::config::{self, Settings};
use marquee_core::prelude::*;

pub use export::{export_dashboard, ExportSummary};

/// Settings for a run: an explicit `--config` file must load, otherwise the
/// optional `.marquee/config.toml` next to the dataset is used.
pub fn resolve_settings(dataset: &Path, config_file: Option<&Path>) -> Result<Settings> {
    match config_file {
        Some(path) => config::load_settings_file(path),
        None => Ok(config::load_settings(&dataset_dir(dataset))),
    }
}

/// Directory holding the dataset; `.` for a bare file name.
pub fn dataset_dir(dataset: &Path) -> PathBuf {
    match dataset.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run the interactive terminal dashboard
pub async fn run_dashboard(dataset: PathBuf, settings: Settings) -> Result<()> {
    info!("Dataset: {}", dataset.display());
    let result = marquee_tui::run(dataset, settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

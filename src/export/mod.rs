//! Static HTML export - write the dashboard as a single page and exit
//!
//! Shares the dataset loading, aggregation and chart building with the
//! terminal dashboard; only the presentation differs.

pub mod html;

use std::path::{Path, PathBuf};

use chrono::Local;

use marquee_app::config::Settings;
use marquee_app::Dashboard;
use marquee_core::prelude::*;
use marquee_core::Catalog;

/// What an export wrote
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub films: usize,
    pub bytes: usize,
}

/// Load `dataset`, build the dashboard and write the page to `output`.
pub fn export_dashboard(dataset: &Path, output: &Path, settings: &Settings) -> Result<ExportSummary> {
    let catalog = Catalog::load(dataset)
        .with_context(|| format!("Export of {} aborted", dataset.display()))?;
    let dashboard = Dashboard::build(&catalog, settings.chart_options());

    let title = match dataset.file_stem() {
        Some(stem) => format!("Box Office Dashboard: {}", stem.to_string_lossy()),
        None => "Box Office Dashboard".to_string(),
    };
    let page = html::render_page(&title, &catalog, &dashboard, Local::now())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::export(format!("Cannot create {}: {}", parent.display(), e)))?;
    }
    std::fs::write(output, &page)
        .map_err(|e| Error::export(format!("Cannot write {}: {}", output.display(), e)))?;

    info!(
        "Exported {} films to {} ({} bytes)",
        catalog.len(),
        output.display(),
        page.len()
    );
    Ok(ExportSummary {
        output: output.to_path_buf(),
        films: catalog.len(),
        bytes: page.len(),
    })
}

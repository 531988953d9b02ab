//! Settings parser for .marquee/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use marquee_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const MARQUEE_DIR: &str = ".marquee";

/// Default config location for a dataset directory.
pub fn config_path_for(dataset_dir: &Path) -> PathBuf {
    dataset_dir.join(MARQUEE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.marquee/config.toml` under `dataset_dir`.
///
/// A missing file means defaults; an unreadable or invalid file is logged
/// and also falls back to defaults.
pub fn load_settings(dataset_dir: &Path) -> Settings {
    let config_path = config_path_for(dataset_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_file(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path. Unlike [`load_settings`], a missing
/// or invalid file is an error.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

//! Configuration file parsing for Marquee
//!
//! Supports `.marquee/config.toml` next to the dataset, or an explicit
//! path given on the command line.

pub mod settings;
pub mod types;

pub use settings::{config_path_for, load_settings, load_settings_file};
pub use types::*;

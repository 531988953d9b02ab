//! Configuration types for Marquee
//!
//! Defines `Settings` and its sections. Every field has a default so a
//! partial file only overrides what it names.

use marquee_core::{ChartOptions, DEFAULT_WRAP_WIDTH};
use serde::{Deserialize, Serialize};

/// Application settings (.marquee/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub tooltip: TooltipSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Chart sizing derived from the dashboard and tooltip sections.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            top_films: self.dashboard.top_films,
            top_directors: self.dashboard.top_directors,
            wrap_width: self.tooltip.wrap_width,
        }
    }
}

/// Chart sizing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Films shown in the top-grossing chart
    #[serde(default = "default_top_n")]
    pub top_films: usize,

    /// Directors shown in the leaderboard
    #[serde(default = "default_top_n")]
    pub top_directors: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_films: default_top_n(),
            top_directors: default_top_n(),
        }
    }
}

/// Tooltip layout
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TooltipSettings {
    /// Insight wrap width for chart tooltips, in characters
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Table overlay width in cells
    #[serde(default = "default_max_width")]
    pub max_width: u16,

    /// Rows between the hovered row and the overlay
    #[serde(default)]
    pub gap: u16,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            max_width: default_max_width(),
            gap: 0,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key binding footer
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_help: true }
    }
}

fn default_top_n() -> usize {
    10
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_max_width() -> u16 {
    44
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.dashboard.top_films, 10);
        assert_eq!(settings.dashboard.top_directors, 10);
        assert_eq!(settings.tooltip.wrap_width, 50);
        assert_eq!(settings.tooltip.max_width, 44);
        assert_eq!(settings.tooltip.gap, 0);
        assert!(settings.ui.show_help);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[dashboard]
top_films = 5
"#,
        )
        .unwrap();
        assert_eq!(settings.dashboard.top_films, 5);
        assert_eq!(settings.dashboard.top_directors, 10);
        assert_eq!(settings.tooltip, TooltipSettings::default());
    }

    #[test]
    fn test_chart_options() {
        let mut settings = Settings::default();
        settings.dashboard.top_directors = 3;
        settings.tooltip.wrap_width = 30;
        let options = settings.chart_options();
        assert_eq!(options.top_films, 10);
        assert_eq!(options.top_directors, 3);
        assert_eq!(options.wrap_width, 30);
    }
}

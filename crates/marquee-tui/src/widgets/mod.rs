//! Custom widget components

pub mod chart_panel;
mod controls;
mod film_table;
mod footer;
mod header;
mod ranked_bars;
mod share_chart;
mod stat_bar;
pub mod tooltip_overlay;
mod trend_chart;

pub use controls::{control_areas, Controls};
pub use film_table::{body_area, FilmTable};
pub use footer::Footer;
pub use header::{LoadStatus, MainHeader};
pub use ranked_bars::RankedBars;
pub use share_chart::ShareChart;
pub use stat_bar::StatBar;
pub use tooltip_overlay::{overlay_rect, render_shadow, TooltipOverlay};
pub use trend_chart::TrendChart;

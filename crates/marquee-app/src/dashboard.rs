//! Dashboard model: headline stats plus the four charts.

use marquee_core::{summarize, Catalog, ChartConfig, ChartOptions, ChartSet, StatSummary};

use crate::state::ChartSlot;

/// Everything derived from the catalog at load time.
///
/// Built once per load from the full catalog; the table filter never
/// feeds back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: StatSummary,
    pub charts: ChartSet,
}

impl Dashboard {
    pub fn build(catalog: &Catalog, options: ChartOptions) -> Self {
        let films = catalog.films();
        let dashboard = Self {
            summary: summarize(films),
            charts: ChartSet::build(films, options),
        };
        tracing::debug!(
            "Dashboard built: {} films, {} years, {} countries",
            dashboard.summary.count,
            dashboard.charts.over_time.len(),
            dashboard.charts.countries.len()
        );
        dashboard
    }

    pub fn chart(&self, slot: ChartSlot) -> &ChartConfig {
        match slot {
            ChartSlot::TopFilms => &self.charts.top_films,
            ChartSlot::Directors => &self.charts.directors,
            ChartSlot::OverTime => &self.charts.over_time,
            ChartSlot::Countries => &self.charts.countries,
        }
    }
}

//! Chart configuration for the dashboard's four charts
//!
//! A [`ChartConfig`] is the plotting-library-neutral description of one
//! chart: labels, values, colors and the tooltip text for every data point.
//! The terminal renders it with ratatui widgets; the HTML export serializes
//! it to a Chart.js configuration with [`ChartConfig::to_chartjs`].

use std::fmt;

use serde_json::{json, Value};

use crate::aggregate::{self, CountryCounts, YearTotal};
use crate::film::FilmRecord;
use crate::format::{format_box_office, format_currency};
use crate::wrap::{wrap_text, DEFAULT_WRAP_WIDTH};

/// An RGBA color with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Gold accent (#D4AF37).
pub const GOLD: Rgba = Rgba::new(212, 175, 55, 1.0);

/// Pie slice palette, reused from the start when there are more slices.
pub const COUNTRY_PALETTE: [Rgba; 7] = [
    Rgba::new(255, 99, 132, 0.8),
    Rgba::new(54, 162, 235, 0.8),
    Rgba::new(255, 206, 86, 0.8),
    Rgba::new(75, 192, 192, 0.8),
    Rgba::new(153, 102, 255, 0.8),
    Rgba::new(255, 159, 64, 0.8),
    Rgba::new(201, 203, 207, 0.8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }
}

/// How a data point's tooltip text is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipLabel {
    /// `Box Office: $X` followed by the film's insight, wrapped.
    FilmBoxOffice {
        insights: Vec<Option<String>>,
        wrap_width: usize,
    },
    /// `Total Box Office: $X`
    DirectorTotal,
    /// `Yearly Total: $X`
    YearlyTotal,
    /// `<label>: <n> film(s)`
    FilmCount,
}

/// Everything a plotting backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fill colors; a single entry applies to every point.
    pub fill: Vec<Rgba>,
    pub border: Option<Rgba>,
    pub tooltip: TooltipLabel,
}

impl ChartConfig {
    /// Bar chart of the highest grossing films.
    pub fn top_films(films: &[&FilmRecord], wrap_width: usize) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: "Top Grossing Films".to_string(),
            dataset_label: "Box Office (USD)".to_string(),
            labels: films.iter().map(|f| f.title.clone()).collect(),
            values: films.iter().map(|f| f.box_office_or_zero()).collect(),
            fill: vec![GOLD.with_alpha(0.6)],
            border: Some(GOLD),
            tooltip: TooltipLabel::FilmBoxOffice {
                insights: films.iter().map(|f| f.insight.clone()).collect(),
                wrap_width,
            },
        }
    }

    /// Bar chart of directors ranked by total gross.
    pub fn director_leaderboard(ranked: &[(String, f64)]) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: "Director Leaderboard".to_string(),
            dataset_label: "Total Box Office (USD)".to_string(),
            labels: ranked.iter().map(|(name, _)| name.clone()).collect(),
            values: ranked.iter().map(|(_, total)| *total).collect(),
            fill: vec![GOLD.with_alpha(0.6)],
            border: Some(GOLD),
            tooltip: TooltipLabel::DirectorTotal,
        }
    }

    /// Line chart of yearly totals.
    pub fn box_office_over_time(years: &[YearTotal]) -> Self {
        Self {
            kind: ChartKind::Line,
            title: "Box Office Over Time".to_string(),
            dataset_label: "Total Box Office (USD)".to_string(),
            labels: years.iter().map(|y| y.year.to_string()).collect(),
            values: years.iter().map(|y| y.total).collect(),
            fill: vec![GOLD.with_alpha(0.2)],
            border: Some(GOLD),
            tooltip: TooltipLabel::YearlyTotal,
        }
    }

    /// Pie chart of film counts per country, colored in first-occurrence order.
    pub fn country_distribution(counts: &CountryCounts) -> Self {
        let labels: Vec<String> = counts.iter().map(|(c, _)| c.to_string()).collect();
        let fill = (0..labels.len())
            .map(|i| COUNTRY_PALETTE[i % COUNTRY_PALETTE.len()])
            .collect();
        Self {
            kind: ChartKind::Pie,
            title: "Country Distribution".to_string(),
            dataset_label: "# of Films".to_string(),
            labels,
            values: counts.iter().map(|(_, n)| n as f64).collect(),
            fill,
            border: None,
            tooltip: TooltipLabel::FilmCount,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fill color for the point at `index`.
    pub fn color_for(&self, index: usize) -> Rgba {
        if self.fill.is_empty() {
            return GOLD;
        }
        self.fill[index % self.fill.len()]
    }

    /// Tooltip lines for the point at `index`; empty when out of range.
    pub fn tooltip_lines(&self, index: usize) -> Vec<String> {
        let Some(&value) = self.values.get(index) else {
            return Vec::new();
        };
        match &self.tooltip {
            TooltipLabel::FilmBoxOffice {
                insights,
                wrap_width,
            } => {
                let mut lines = vec![format!("Box Office: {}", format_box_office(Some(value)))];
                if let Some(Some(insight)) = insights.get(index) {
                    lines.extend(wrap_text(insight, *wrap_width));
                }
                lines
            }
            TooltipLabel::DirectorTotal => {
                vec![format!("Total Box Office: {}", format_currency(value))]
            }
            TooltipLabel::YearlyTotal => {
                vec![format!("Yearly Total: {}", format_currency(value))]
            }
            TooltipLabel::FilmCount => {
                let label = self.labels.get(index).map(String::as_str).unwrap_or("");
                vec![format!("{}: {} film(s)", label, value as u64)]
            }
        }
    }

    /// Insight attached to a top-film point, if this chart carries them.
    pub fn insight(&self, index: usize) -> Option<&str> {
        match &self.tooltip {
            TooltipLabel::FilmBoxOffice { insights, .. } => {
                insights.get(index).and_then(|i| i.as_deref())
            }
            _ => None,
        }
    }

    /// Chart.js configuration. Each dataset carries `tooltipLines`, the
    /// precomputed tooltip text per point, for the page's label callback.
    pub fn to_chartjs(&self) -> Value {
        let tooltip_lines: Vec<Vec<String>> =
            (0..self.len()).map(|i| self.tooltip_lines(i)).collect();

        let background: Value = match self.kind {
            ChartKind::Pie => json!(self.fill.iter().map(Rgba::to_string).collect::<Vec<_>>()),
            _ => json!(self.color_for(0).to_string()),
        };

        let mut dataset = json!({
            "label": self.dataset_label,
            "data": self.values,
            "backgroundColor": background,
            "tooltipLines": tooltip_lines,
        });

        if let Some(border) = self.border {
            dataset["borderColor"] = json!(border.to_string());
        }
        match self.kind {
            ChartKind::Bar => {
                dataset["borderWidth"] = json!(1);
                dataset["borderRadius"] = json!(4);
                dataset["hoverBackgroundColor"] = json!(GOLD.with_alpha(0.8).to_string());
            }
            ChartKind::Line => {
                dataset["tension"] = json!(0.2);
                dataset["fill"] = json!(true);
                dataset["pointRadius"] = json!(3);
                dataset["pointHoverRadius"] = json!(6);
            }
            ChartKind::Pie => {}
        }

        let mut options = json!({
            "responsive": true,
            "plugins": {
                "tooltip": { "displayColors": false },
            },
        });
        if self.kind != ChartKind::Pie {
            options["interaction"] = json!({ "mode": "index", "intersect": false });
            options["scales"] = json!({
                "y": {
                    "beginAtZero": self.kind == ChartKind::Bar,
                    "ticks": { "color": "#ccc" },
                    "grid": { "color": "#444" },
                },
                "x": {
                    "ticks": { "color": "#ccc" },
                    "grid": { "display": self.kind == ChartKind::Line, "color": "#444" },
                },
            });
        } else {
            options["plugins"]["legend"] = json!({ "labels": { "color": "#ccc" } });
        }

        // Clicking a film bar reports its insight; the legend stays fixed
        if let TooltipLabel::FilmBoxOffice { insights, .. } = &self.tooltip {
            dataset["insights"] = json!(insights);
            options["plugins"]["legend"] = json!({ "onClick": null });
        }

        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": [dataset],
            },
            "options": options,
        })
    }
}

/// Ranking sizes and tooltip width used when building the chart set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub top_films: usize,
    pub top_directors: usize,
    pub wrap_width: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            top_films: 10,
            top_directors: 10,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// The four dashboard charts, built together from the full catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub top_films: ChartConfig,
    pub directors: ChartConfig,
    pub over_time: ChartConfig,
    pub countries: ChartConfig,
}

impl ChartSet {
    pub fn build(films: &[FilmRecord], options: ChartOptions) -> Self {
        let top = aggregate::top_n_by_box_office(films, options.top_films);
        let directors = aggregate::top_directors(
            &aggregate::director_totals(films),
            options.top_directors,
        );
        Self {
            top_films: ChartConfig::top_films(&top, options.wrap_width),
            directors: ChartConfig::director_leaderboard(&directors),
            over_time: ChartConfig::box_office_over_time(&aggregate::yearly_totals(films)),
            countries: ChartConfig::country_distribution(&aggregate::country_counts(films)),
        }
    }

    /// Charts in dashboard order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartConfig> {
        [&self.top_films, &self.directors, &self.over_time, &self.countries].into_iter()
    }
}

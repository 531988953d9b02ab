//! Film record domain type
//!
//! Records arrive from a hand-maintained JSON file, so deserialization is
//! lenient: optional fields may be missing, `null`, or of the wrong type and
//! are normalized to `None` instead of failing the whole dataset.

use serde::Deserialize;
use serde_json::Value;

/// Category used when a record has no country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A single film in the dataset. Immutable after load.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RawFilm")]
pub struct FilmRecord {
    /// Display and search key
    pub title: String,
    /// Release year; `None` when absent, zero, or not numeric
    pub release_year: Option<i32>,
    /// One or more directors, comma-separated
    pub director: String,
    /// Worldwide gross in USD; `None` when absent or not a non-negative number
    pub box_office: Option<f64>,
    /// Production country; `None` when absent or empty
    pub country: Option<String>,
    /// Free-text annotation shown in tooltips; `None` when absent or empty
    pub insight: Option<String>,
}

impl FilmRecord {
    /// Create a record with only a title and director set.
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            ..Default::default()
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_box_office(mut self, amount: f64) -> Self {
        self.box_office = Some(amount);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    /// Box office for sums and sorting (absent counts as zero).
    pub fn box_office_or_zero(&self) -> f64 {
        self.box_office.unwrap_or(0.0)
    }

    /// Release year for sorting (absent counts as zero).
    pub fn year_or_zero(&self) -> i32 {
        self.release_year.unwrap_or(0)
    }

    /// Country aggregation key.
    pub fn country_or_unknown(&self) -> &str {
        self.country.as_deref().unwrap_or(UNKNOWN_COUNTRY)
    }

    /// Trimmed, non-empty director names in listing order.
    pub fn directors(&self) -> impl Iterator<Item = &str> {
        self.director
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn has_insight(&self) -> bool {
        self.insight.is_some()
    }
}

/// Wire shape of a record before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFilm {
    title: Option<String>,
    release_year: Option<Value>,
    director: Option<String>,
    box_office: Option<Value>,
    country: Option<String>,
    insight: Option<String>,
}

impl From<RawFilm> for FilmRecord {
    fn from(raw: RawFilm) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            release_year: normalize_year(raw.release_year),
            director: raw.director.unwrap_or_default(),
            box_office: normalize_amount(raw.box_office),
            country: non_empty(raw.country),
            insight: non_empty(raw.insight),
        }
    }
}

/// Years may be numbers or numeric strings. Zero is treated as absent.
fn normalize_year(value: Option<Value>) -> Option<i32> {
    let year = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !year.is_finite() {
        return None;
    }
    let year = year.trunc();
    if year == 0.0 || year.abs() > i32::MAX as f64 {
        return None;
    }
    Some(year as i32)
}

fn normalize_amount(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite() && *v >= 0.0),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

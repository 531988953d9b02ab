//! # marquee-core - Core Domain Types
//!
//! Foundation crate for Marquee. Provides the film record type, dataset
//! loading, the aggregations behind every chart, tooltip text wrapping,
//! currency formatting, markup escaping and chart configuration.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Data (`film`, `catalog`)
//! - [`FilmRecord`] - One film, normalized from lenient JSON input
//! - [`Catalog`] - Immutable shared collection of every loaded film
//!
//! ### Aggregation (`aggregate`)
//! - [`summarize()`] - Count, highest single gross and total gross
//! - [`top_n_by_box_office()`], [`director_totals()`], [`top_directors()`],
//!   [`yearly_totals()`], [`country_counts()`]
//!
//! ### Presentation helpers
//! - [`wrap_text()`] - Greedy word wrap for tooltips
//! - [`format_currency()`], [`format_box_office()`] - `$1,234,567`
//! - [`escape_html()`] - Escape dataset text for markup
//! - [`ChartConfig`], [`ChartSet`] - Chart data, colors and tooltip labels
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use marquee_core::prelude::*;
//! ```

pub mod aggregate;
pub mod catalog;
pub mod chart;
pub mod error;
pub mod film;
pub mod format;
pub mod logging;
pub mod markup;
pub mod prelude;
pub mod wrap;

// Re-export commonly used types at crate root for convenience
pub use aggregate::{
    country_counts, director_totals, max_box_office, summarize, top_directors,
    top_n_by_box_office, total_box_office, total_count, yearly_totals, CountryCounts,
    DirectorTotals, OrderedTally, StatSummary, YearTotal,
};
pub use catalog::Catalog;
pub use chart::{ChartConfig, ChartKind, ChartOptions, ChartSet, Rgba, TooltipLabel};
pub use error::{Error, Result, ResultExt};
pub use film::{FilmRecord, UNKNOWN_COUNTRY};
pub use format::{
    format_box_office, format_compact_currency, format_count, format_currency, format_thousands,
};
pub use markup::escape_html;
pub use wrap::{wrap_text, DEFAULT_WRAP_WIDTH};

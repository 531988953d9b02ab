//! Aggregations over the film catalog
//!
//! Pure functions that turn a flat slice of [`FilmRecord`]s into the shapes
//! the stat bar and charts need. Every ranking uses a stable sort, so equal
//! values keep their original (or first-occurrence) order.

use std::collections::{BTreeMap, HashMap};
use std::ops::AddAssign;

use crate::film::FilmRecord;

/// Values shown in the stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatSummary {
    pub count: usize,
    pub max_box_office: f64,
    pub total_box_office: f64,
}

/// Box office total for a single release year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearTotal {
    pub year: i32,
    pub total: f64,
}

/// Keyed running totals that iterate in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedTally<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

/// Director name → summed box office.
pub type DirectorTotals = OrderedTally<f64>;

/// Country name → number of films.
pub type CountryCounts = OrderedTally<usize>;

impl<V> Default for OrderedTally<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: Copy + Default + AddAssign> OrderedTally<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, inserting it at the end if unseen.
    pub fn add(&mut self, key: &str, amount: V) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                let mut value = V::default();
                value += amount;
                self.entries.push((key.to_string(), value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn entries(&self) -> &[(String, V)] {
        &self.entries
    }
}

pub fn total_count(records: &[FilmRecord]) -> usize {
    records.len()
}

/// Largest box office among records that carry one; 0 when none do.
pub fn max_box_office(records: &[FilmRecord]) -> f64 {
    records
        .iter()
        .filter_map(|f| f.box_office)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}

pub fn total_box_office(records: &[FilmRecord]) -> f64 {
    records.iter().map(FilmRecord::box_office_or_zero).sum()
}

pub fn summarize(records: &[FilmRecord]) -> StatSummary {
    StatSummary {
        count: total_count(records),
        max_box_office: max_box_office(records),
        total_box_office: total_box_office(records),
    }
}

/// Highest grossing films first, truncated to `n`.
pub fn top_n_by_box_office(records: &[FilmRecord], n: usize) -> Vec<&FilmRecord> {
    let mut ranked: Vec<&FilmRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.box_office_or_zero().total_cmp(&a.box_office_or_zero()));
    ranked.truncate(n);
    ranked
}

/// Sum box office per director.
///
/// Co-directed films contribute their full gross to each listed director,
/// so the totals intentionally double count shared credits.
pub fn director_totals(records: &[FilmRecord]) -> DirectorTotals {
    let mut totals = DirectorTotals::new();
    for film in records {
        let amount = film.box_office_or_zero();
        for name in film.directors() {
            totals.add(name, amount);
        }
    }
    totals
}

/// Directors ranked by total gross, truncated to `n`.
pub fn top_directors(totals: &DirectorTotals, n: usize) -> Vec<(String, f64)> {
    let mut ranked = totals.entries().to_vec();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Box office summed per release year, ascending. Records without a year are skipped.
pub fn yearly_totals(records: &[FilmRecord]) -> Vec<YearTotal> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for film in records {
        if let Some(year) = film.release_year {
            *by_year.entry(year).or_default() += film.box_office_or_zero();
        }
    }
    by_year
        .into_iter()
        .map(|(year, total)| YearTotal { year, total })
        .collect()
}

pub fn country_counts(records: &[FilmRecord]) -> CountryCounts {
    let mut counts = CountryCounts::new();
    for film in records {
        counts.add(film.country_or_unknown(), 1);
    }
    counts
}

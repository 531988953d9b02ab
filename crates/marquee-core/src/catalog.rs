//! The in-memory film catalog
//!
//! The catalog is loaded once and never mutated. It is cheap to clone
//! (reference-counted) so views can hold it without copying records.

use std::path::Path;
use std::sync::Arc;

use crate::film::FilmRecord;
use crate::prelude::*;

/// Immutable, shared collection of every film in the dataset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    films: Arc<[FilmRecord]>,
}

impl Catalog {
    pub fn new(films: Vec<FilmRecord>) -> Self {
        Self {
            films: films.into(),
        }
    }

    /// Parse a JSON array of film objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let films: Vec<FilmRecord> = serde_json::from_str(json)?;
        Ok(Self::new(films))
    }

    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::dataset_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| Error::dataset_load(path, e.to_string()))?;
        debug!("Loaded {} films from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilmRecord> {
        self.films.iter()
    }
}

impl From<Vec<FilmRecord>> for Catalog {
    fn from(films: Vec<FilmRecord>) -> Self {
        Self::new(films)
    }
}

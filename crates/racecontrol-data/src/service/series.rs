//! CRUD service for racing-series records.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Series;
use crate::store::{Store, repo::Repository};

/// Typed service exposing the CRUD contract for racing series.
pub struct SeriesService {
    repo: Repository<Series>,
}

impl SeriesService {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns whether a series with the given name exists.
    pub fn check_exists(&self, series_name: &str) -> Result<bool> {
        self.repo.exists(series_name)
    }

    /// Returns the series with the given name.
    pub fn get(&self, series_name: &str) -> Result<Series> {
        self.repo.get(series_name)
    }

    /// Returns all series in insertion order.
    pub fn get_all(&self) -> Result<Vec<Series>> {
        self.repo.get_all()
    }

    /// Creates and persists a series with the given name. The description
    /// starts empty and is set via [`SeriesService::update`].
    pub fn create_new(&self, series_name: &str) -> Result<Series> {
        let series = Series {
            series_name: series_name.to_string(),
            description: String::new(),
        };
        self.repo.insert(&series)?;
        Ok(series)
    }

    /// Persists the given series' field values over the existing record
    /// with the same name.
    pub fn update(&self, series: &Series) -> Result<()> {
        self.repo.update(series)
    }

    /// Removes the series with the given name.
    pub fn delete(&self, series_name: &str) -> Result<()> {
        self.repo.delete(series_name)
    }
}

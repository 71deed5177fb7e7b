//! CRUD service for continent records.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Continent;
use crate::store::{Store, repo::Repository};

/// Typed service exposing the CRUD contract for continents.
pub struct ContinentService {
    repo: Repository<Continent>,
}

impl ContinentService {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns whether a continent with the given code exists.
    pub fn check_exists(&self, continent_code: &str) -> Result<bool> {
        self.repo.exists(continent_code)
    }

    /// Returns the continent with the given code.
    pub fn get(&self, continent_code: &str) -> Result<Continent> {
        self.repo.get(continent_code)
    }

    /// Returns all continents in insertion order.
    pub fn get_all(&self) -> Result<Vec<Continent>> {
        self.repo.get_all()
    }

    /// Creates and persists a continent with the given code. The display
    /// name starts empty and is set via [`ContinentService::update`].
    pub fn create_new(&self, continent_code: &str) -> Result<Continent> {
        let continent = Continent {
            continent_code: continent_code.to_string(),
            name: String::new(),
        };
        self.repo.insert(&continent)?;
        Ok(continent)
    }

    /// Persists the given continent's field values over the existing
    /// record with the same code.
    pub fn update(&self, continent: &Continent) -> Result<()> {
        self.repo.update(continent)
    }

    /// Removes the continent with the given code.
    pub fn delete(&self, continent_code: &str) -> Result<()> {
        self.repo.delete(continent_code)
    }
}

//! CRUD service for country records.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Country;
use crate::store::{Store, repo::Repository};

/// Typed service exposing the CRUD contract for countries.
pub struct CountryService {
    repo: Repository<Country>,
}

impl CountryService {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns whether a country with the given code exists.
    pub fn check_exists(&self, country_code: &str) -> Result<bool> {
        self.repo.exists(country_code)
    }

    /// Returns the country with the given code.
    pub fn get(&self, country_code: &str) -> Result<Country> {
        self.repo.get(country_code)
    }

    /// Returns all countries in insertion order.
    pub fn get_all(&self) -> Result<Vec<Country>> {
        self.repo.get_all()
    }

    /// Returns all countries belonging to the given continent.
    pub fn get_all_in_continent(&self, continent_code: &str) -> Result<Vec<Country>> {
        self.repo.list_where("continent_code", continent_code)
    }

    /// Creates and persists a country with the given code, referencing an
    /// existing continent. The display name starts empty.
    pub fn create_new(&self, country_code: &str, continent_code: &str) -> Result<Country> {
        let country = Country {
            country_code: country_code.to_string(),
            name: String::new(),
            continent_code: continent_code.to_string(),
        };
        self.repo.insert(&country)?;
        Ok(country)
    }

    /// Persists the given country's field values over the existing record
    /// with the same code.
    pub fn update(&self, country: &Country) -> Result<()> {
        self.repo.update(country)
    }

    /// Removes the country with the given code.
    pub fn delete(&self, country_code: &str) -> Result<()> {
        self.repo.delete(country_code)
    }
}

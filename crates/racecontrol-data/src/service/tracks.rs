//! CRUD service for track records.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Track;
use crate::store::{Store, repo::Repository};

/// Typed service exposing the CRUD contract for tracks.
pub struct TrackService {
    repo: Repository<Track>,
}

impl TrackService {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns whether a track with the given name exists.
    pub fn check_exists(&self, track_name: &str) -> Result<bool> {
        self.repo.exists(track_name)
    }

    /// Returns the track with the given name.
    pub fn get(&self, track_name: &str) -> Result<Track> {
        self.repo.get(track_name)
    }

    /// Returns all tracks in insertion order.
    pub fn get_all(&self) -> Result<Vec<Track>> {
        self.repo.get_all()
    }

    /// Returns all tracks located in the given country.
    pub fn get_all_in_country(&self, country_code: &str) -> Result<Vec<Track>> {
        self.repo.list_where("country_code", country_code)
    }

    /// Creates and persists a track with the given name, referencing an
    /// existing country. The length starts at zero.
    pub fn create_new(&self, track_name: &str, country_code: &str) -> Result<Track> {
        let track = Track {
            track_name: track_name.to_string(),
            length: 0.0,
            country_code: country_code.to_string(),
        };
        self.repo.insert(&track)?;
        Ok(track)
    }

    /// Persists the given track's field values over the existing record
    /// with the same name.
    pub fn update(&self, track: &Track) -> Result<()> {
        self.repo.update(track)
    }

    /// Removes the track with the given name.
    pub fn delete(&self, track_name: &str) -> Result<()> {
        self.repo.delete(track_name)
    }
}

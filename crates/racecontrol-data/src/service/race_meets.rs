//! CRUD service for race-meet records.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::models::RaceMeet;
use crate::store::{Store, repo::Repository};

/// Typed service exposing the CRUD contract for race meets.
pub struct RaceMeetService {
    repo: Repository<RaceMeet>,
}

impl RaceMeetService {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns whether a meet with the given identifier exists.
    pub fn check_exists(&self, race_meet_id: Uuid) -> Result<bool> {
        self.repo.exists(&race_meet_id)
    }

    /// Returns the meet with the given identifier.
    pub fn get(&self, race_meet_id: Uuid) -> Result<RaceMeet> {
        self.repo.get(&race_meet_id)
    }

    /// Returns all meets in insertion order.
    pub fn get_all(&self) -> Result<Vec<RaceMeet>> {
        self.repo.get_all()
    }

    /// Returns all meets held at the given track.
    pub fn get_all_at_track(&self, track_name: &str) -> Result<Vec<RaceMeet>> {
        self.repo.list_where("track_name", track_name)
    }

    /// Creates and persists a meet at an existing track as part of an
    /// existing series. The identifier is generated here, never
    /// caller-supplied; description and schedule start unset.
    pub fn create_new(&self, track_name: &str, series_name: &str) -> Result<RaceMeet> {
        let meet = RaceMeet {
            race_meet_id: Uuid::new_v4(),
            description: String::new(),
            track_name: track_name.to_string(),
            series_name: series_name.to_string(),
            start_day: None,
            end_day: None,
        };
        self.repo.insert(&meet)?;
        Ok(meet)
    }

    /// Persists the given meet's field values over the existing record
    /// with the same identifier.
    pub fn update(&self, race_meet: &RaceMeet) -> Result<()> {
        self.repo.update(race_meet)
    }

    /// Removes the meet with the given identifier.
    pub fn delete(&self, race_meet_id: Uuid) -> Result<()> {
        self.repo.delete(&race_meet_id)
    }
}

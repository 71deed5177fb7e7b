//! High-level data service bundling one typed service per entity type.
//!
//! [`DataService`] is the single entry point into the store: it owns the
//! storage context's lifecycle and hands out the per-entity services,
//! each bound to the same backing database file. Construction goes
//! through [`DataServiceBuilder`], which resolves the file path from a
//! database name and a relative folder under the application-data root.
//!
//! The lifecycle is strictly linear: build, perform CRUD operations
//! through the entity services, then optionally [`DataService::delete_source`]
//! and/or [`DataService::close`]. Both teardown operations consume the
//! service, so a disposed handle cannot be used again.

use std::path::Path;
use std::sync::Arc;

use crate::error::{DataError, Result};
use crate::store::Store;

pub mod builder;
pub mod continents;
pub mod countries;
pub mod race_meets;
pub mod series;
pub mod tracks;

pub use builder::DataServiceBuilder;
pub use continents::ContinentService;
pub use countries::CountryService;
pub use race_meets::RaceMeetService;
pub use series::SeriesService;
pub use tracks::TrackService;

/// Aggregate handle over all entity services for one backing store.
pub struct DataService {
    store: Arc<Store>,
    continents: ContinentService,
    countries: CountryService,
    tracks: TrackService,
    series: SeriesService,
    race_meets: RaceMeetService,
}

impl DataService {
    /// Opens (creating if absent) the store named `database_name` under
    /// `folder`, resolved against the default application-data root.
    ///
    /// Equivalent to `DataServiceBuilder::new(database_name, folder).build()`.
    pub fn open(database_name: &str, folder: impl AsRef<Path>) -> Result<Self> {
        DataServiceBuilder::new(database_name, folder.as_ref()).build()
    }

    pub(crate) fn from_store(store: Arc<Store>) -> Self {
        Self {
            store: Arc::clone(&store),
            continents: ContinentService::new(Arc::clone(&store)),
            countries: CountryService::new(Arc::clone(&store)),
            tracks: TrackService::new(Arc::clone(&store)),
            series: SeriesService::new(Arc::clone(&store)),
            race_meets: RaceMeetService::new(store),
        }
    }

    /// Service for continent records.
    pub fn continents(&self) -> &ContinentService {
        &self.continents
    }

    /// Service for country records.
    pub fn countries(&self) -> &CountryService {
        &self.countries
    }

    /// Service for track records.
    pub fn tracks(&self) -> &TrackService {
        &self.tracks
    }

    /// Service for racing-series records.
    pub fn series(&self) -> &SeriesService {
        &self.series
    }

    /// Service for race-meet records.
    pub fn race_meets(&self) -> &RaceMeetService {
        &self.race_meets
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Irrecoverably removes the backing storage file. Intended for
    /// teardown and testing, not normal operation.
    pub fn delete_source(self) -> Result<()> {
        self.into_store()?.delete_source()
    }

    /// Releases the storage context's file handle.
    pub fn close(self) -> Result<()> {
        self.into_store()?.close()
    }

    fn into_store(self) -> Result<Store> {
        let Self {
            store,
            continents,
            countries,
            tracks,
            series,
            race_meets,
        } = self;

        // The entity services hold the only other references; dropping
        // them makes the unwrap below infallible.
        drop(continents);
        drop(countries);
        drop(tracks);
        drop(series);
        drop(race_meets);

        Arc::try_unwrap(store).map_err(|_| DataError::Configuration {
            message: "storage context is still referenced".to_string(),
        })
    }
}

//! Data-access library for the race-control domain.
//!
//! This crate persists continents, countries, tracks, racing series, and
//! race meets in a single embedded SQLite file and exposes a uniform CRUD
//! contract for each entity type. The [`DataService`] facade owns the
//! backing store's lifecycle and bundles one typed service per entity;
//! each service translates engine-level failures into the typed
//! [`DataError`] taxonomy (not-found, already-exists, or a generic
//! database failure).
//!
//! The model is synchronous and single-writer: every operation performs
//! its backing-store work and returns only after the write has committed.
//!
//! # Quick Start
//!
//! ```rust
//! use racecontrol_data::DataServiceBuilder;
//!
//! # fn example() -> racecontrol_data::Result<()> {
//! // Open (creating if absent) <data-root>/RaceControl/races.db
//! let service = DataServiceBuilder::new("races", "RaceControl").build()?;
//!
//! // Create a reference chain: continent -> country -> track -> meet
//! service.continents().create_new("EU")?;
//! service.countries().create_new("DE", "EU")?;
//! service.tracks().create_new("Nurburgring", "DE")?;
//! service.series().create_new("F1")?;
//! let meet = service.race_meets().create_new("Nurburgring", "F1")?;
//!
//! println!("created meet {}", meet.race_meet_id);
//!
//! // Release the file handle
//! service.close()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{DataError, Result};
pub use models::{Continent, Country, RaceMeet, Series, Track};
pub use service::{
    ContinentService, CountryService, DataService, DataServiceBuilder, RaceMeetService,
    SeriesService, TrackService,
};
pub use store::Store;

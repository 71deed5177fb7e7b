//! Data models for the race-control domain.
//!
//! This module contains the flat entity records persisted by the store:
//! continents, countries, tracks, racing series, and race meets. Each
//! record is identified by a unique key (a code, a name, or a generated
//! UUID for race meets) and may reference a parent record by that parent's
//! key. Referential integrity is enforced by the store at creation time.

pub mod continent;
pub mod country;
pub mod race_meet;
pub mod series;
pub mod track;


// Re-export all entity types at the models level
pub use continent::Continent;
pub use country::Country;
pub use race_meet::RaceMeet;
pub use series::Series;
pub use track::Track;

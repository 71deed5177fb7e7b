//! Race meet model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A race meet: an event held at a track as part of a series.
///
/// Meets are keyed by a UUID generated at creation; the identifier is
/// never caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceMeet {
    /// Unique identifier, assigned at creation
    pub race_meet_id: Uuid,

    /// Free-form description of the meet
    pub description: String,

    /// Name of the track the meet is held at
    pub track_name: String,

    /// Name of the series the meet belongs to
    pub series_name: String,

    /// First day of the meet, if scheduled
    pub start_day: Option<Date>,

    /// Last day of the meet, if scheduled
    pub end_day: Option<Date>,
}

//! Track model definition.

use serde::{Deserialize, Serialize};

/// A racing track, keyed by its name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Unique track name
    pub track_name: String,

    /// Track length in kilometres (0.0 until set via update)
    pub length: f64,

    /// Code of the country this track is located in
    pub country_code: String,
}

//! Country model definition.

use serde::{Deserialize, Serialize};

/// A country, keyed by its short code (e.g. `"DE"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// Unique country code
    pub country_code: String,

    /// Display name of the country
    pub name: String,

    /// Code of the continent this country belongs to
    pub continent_code: String,
}

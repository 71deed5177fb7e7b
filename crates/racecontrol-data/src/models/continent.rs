//! Continent model definition.

use serde::{Deserialize, Serialize};

/// A continent, keyed by its short code (e.g. `"EU"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Continent {
    /// Unique continent code
    pub continent_code: String,

    /// Display name of the continent
    pub name: String,
}

//! Racing series model definition.

use serde::{Deserialize, Serialize};

/// A racing series, keyed by its name (e.g. `"F1"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Unique series name
    pub series_name: String,

    /// Free-form description of the series
    pub description: String,
}

//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Store {
    /// Initializes the database schema using the embedded SQL file.
    ///
    /// Every statement in the schema is guarded with `IF NOT EXISTS`, so
    /// applying it to an already provisioned file performs no writes.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enforce declared foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}

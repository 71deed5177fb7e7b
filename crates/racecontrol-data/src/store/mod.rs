//! Storage context and SQLite management for the race-control store.
//!
//! This module owns the connection to the single on-disk database file.
//! It applies the embedded schema on open, exposes the generic repository
//! used by the typed services, and handles teardown of the backing file.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DataError, DatabaseResultExt, Result};

pub(crate) mod records;
pub(crate) mod repo;
mod schema;

/// Connection and lifecycle handler for one backing database file.
pub struct Store {
    connection: Connection,
    path: PathBuf,
}

impl Store {
    /// Opens (creating if absent) the database at `path` and initializes
    /// the schema. Re-opening an existing file leaves its contents and
    /// modification time untouched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection =
            Connection::open(&path).db_context("Failed to open database connection")?;

        let store = Self { connection, path };
        store.initialize_schema()?;
        log::debug!("opened store at {}", store.path.display());
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Closes the connection, releasing the file handle.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| DataError::database_error("Failed to close database connection", e))
    }

    /// Closes the connection and removes the backing file. Irrecoverable.
    pub fn delete_source(self) -> Result<()> {
        let path = self.path.clone();
        self.close()?;
        std::fs::remove_file(&path).map_err(|e| DataError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        log::info!("deleted store at {}", path.display());
        Ok(())
    }
}

//! Error types for the race-control data-access library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all data-access operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// No record exists for the requested key, or a referenced parent
    /// record is missing at creation time.
    #[error("{entity} with key '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    /// Creation attempted with a key that already has a record.
    #[error("{entity} with key '{key}' already exists")]
    AlreadyExists { entity: &'static str, key: String },
    /// Database connection or query errors not covered by the domain
    /// variants above.
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DataError {
    /// Creates a not-found error for the given entity and key.
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        DataError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates an already-exists error for the given entity and key.
    pub(crate) fn already_exists(entity: &'static str, key: impl ToString) -> Self {
        DataError::AlreadyExists {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        DataError::Database {
            message: message.to_string(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DataError::database_error(message, e))
    }
}

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, DataError>;

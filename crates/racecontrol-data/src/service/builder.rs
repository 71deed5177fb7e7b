//! Builder for creating and configuring DataService instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::DataService;
use crate::{
    error::{DataError, Result},
    store::Store,
};

/// Builder for creating and configuring DataService instances.
#[derive(Debug, Clone)]
pub struct DataServiceBuilder {
    database_name: String,
    folder: PathBuf,
    data_root: Option<PathBuf>,
}

impl DataServiceBuilder {
    /// Creates a builder for the store named `database_name`, located in
    /// `folder` relative to the application-data root.
    pub fn new(database_name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            database_name: database_name.into(),
            folder: folder.into(),
            data_root: None,
        }
    }

    /// Overrides the application-data root the relative folder is
    /// resolved against.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME` or `~/.local/share`.
    pub fn with_data_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.data_root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Builds the configured data service, provisioning the directory
    /// tree and the backing file if absent. An existing file is reused
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DataError::FileSystem` if the directory tree cannot be
    /// created, `DataError::XdgDirectory` if no data root is available,
    /// and `DataError::Database` if database initialization fails.
    pub fn build(self) -> Result<DataService> {
        let root = match self.data_root {
            Some(root) => root,
            None => Self::default_data_root()?,
        };

        let db_folder = root.join(&self.folder);
        std::fs::create_dir_all(&db_folder).map_err(|e| DataError::FileSystem {
            path: db_folder.clone(),
            source: e,
        })?;

        let db_path = db_folder.join(format!("{}.db", self.database_name));
        let store = Store::open(&db_path)?;
        log::info!("data service ready at {}", db_path.display());

        Ok(DataService::from_store(Arc::new(store)))
    }

    /// Returns the default application-data root following the XDG Base
    /// Directory specification.
    fn default_data_root() -> Result<PathBuf> {
        xdg::BaseDirectories::new()
            .get_data_home()
            .ok_or_else(|| DataError::XdgDirectory("no XDG data home available".to_string()))
    }
}

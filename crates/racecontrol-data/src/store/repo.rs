//! Generic entity repository over the storage context.
//!
//! One `Repository<E>` instance per entity type implements the uniform
//! CRUD contract: existence check, point lookup, bulk and scoped listing,
//! insert, update, and delete. Engine-level failure signals are translated
//! into domain errors here:
//!
//! - a point query matching no row becomes [`DataError::NotFound`]
//! - an insert colliding with an existing key becomes
//!   [`DataError::AlreadyExists`]
//! - an update affecting zero rows becomes [`DataError::NotFound`]
//! - an insert violating a foreign key becomes [`DataError::NotFound`]
//!   naming the missing parent record
//!
//! Anything else surfaces as [`DataError::Database`] untouched.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use rusqlite::{Connection, OptionalExtension, Row, ToSql, ffi, params};

use super::Store;
use crate::error::{DataError, DatabaseResultExt, Result};

/// A declared reference from a record to a parent record's key.
pub(crate) struct ForeignKeyRef {
    pub entity: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    pub key: String,
}

impl ForeignKeyRef {
    /// Builds a reference to the parent record type `P` with the given key.
    pub fn to<P: Record>(key: impl Into<String>) -> Self {
        Self {
            entity: P::ENTITY,
            table: P::TABLE,
            key_column: P::KEY_COLUMN,
            key: key.into(),
        }
    }
}

/// Binding between an entity type and its table: key metadata, row
/// mapping, the insert/update statements, and the declared parent
/// references validated at creation time.
pub(crate) trait Record: Sized {
    /// Key type of the entity (`str` for coded/named entities, `Uuid` for
    /// race meets).
    type Key: ToSql + fmt::Display + ?Sized;

    /// Entity name used in domain errors.
    const ENTITY: &'static str;
    /// Backing table name.
    const TABLE: &'static str;
    /// Name of the primary-key column.
    const KEY_COLUMN: &'static str;
    /// Select list covering all persisted columns, in `from_row` order.
    const COLUMNS: &'static str;

    /// The record's key value.
    fn key(&self) -> &Self::Key;

    /// Maps a row (selected via [`Record::COLUMNS`]) into the entity.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Inserts the record, returning the number of rows written.
    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize>;

    /// Updates the record by key, returning the number of rows affected.
    fn update(&self, conn: &Connection) -> rusqlite::Result<usize>;

    /// Parent references to probe when an insert violates a foreign key.
    fn foreign_keys(&self) -> Vec<ForeignKeyRef> {
        Vec::new()
    }
}

/// Uniform CRUD interface for one entity type over a shared store.
pub(crate) struct Repository<E> {
    store: Arc<Store>,
    _entity: PhantomData<E>,
}

impl<E: Record> Repository<E> {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Returns whether a record with the given key exists. A missing
    /// record is `Ok(false)`, never an error.
    pub fn exists(&self, key: &E::Key) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
            E::TABLE,
            E::KEY_COLUMN
        );
        self.store
            .connection()
            .query_row(&sql, params![key], |row| row.get(0))
            .db_context("Failed to check record existence")
    }

    /// Returns the unique record with the given key.
    ///
    /// The key column is the table's primary key, so the engine enforces
    /// uniqueness; no multiplicity check is needed here.
    pub fn get(&self, key: &E::Key) -> Result<E> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            E::COLUMNS,
            E::TABLE,
            E::KEY_COLUMN
        );
        self.store
            .connection()
            .query_row(&sql, params![key], E::from_row)
            .optional()
            .db_context("Failed to query record")?
            .ok_or_else(|| DataError::not_found(E::ENTITY, key))
    }

    /// Returns every record in the collection, in insertion order.
    pub fn get_all(&self) -> Result<Vec<E>> {
        let sql = format!("SELECT {} FROM {} ORDER BY rowid", E::COLUMNS, E::TABLE);
        self.query_all(&sql, params![])
    }

    /// Returns the records whose `column` equals `value`, in insertion
    /// order. Used for the entity-specific scoped listings.
    pub fn list_where(&self, column: &str, value: &str) -> Result<Vec<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {column} = ?1 ORDER BY rowid",
            E::COLUMNS,
            E::TABLE
        );
        self.query_all(&sql, params![value])
    }

    fn query_all(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<E>> {
        let mut stmt = self
            .store
            .connection()
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params, E::from_row)
            .db_context("Failed to query records")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch records");
        records
    }

    /// Persists a new record. The write commits before returning.
    pub fn insert(&self, entity: &E) -> Result<()> {
        entity
            .insert(self.store.connection())
            .map_err(|e| self.translate_insert_error(entity, e))?;
        Ok(())
    }

    /// Persists the given record's field values over the existing record
    /// with the same key. No upsert: a missing key is an error.
    pub fn update(&self, entity: &E) -> Result<()> {
        let rows = entity
            .update(self.store.connection())
            .db_context("Failed to update record")?;

        if rows == 0 {
            return Err(DataError::not_found(E::ENTITY, entity.key()));
        }
        Ok(())
    }

    /// Removes the record with the given key. Lookup happens first, so
    /// delete shares `get`'s not-found behavior.
    pub fn delete(&self, key: &E::Key) -> Result<()> {
        let _existing = self.get(key)?;

        let sql = format!("DELETE FROM {} WHERE {} = ?1", E::TABLE, E::KEY_COLUMN);
        self.store
            .connection()
            .execute(&sql, params![key])
            .db_context("Failed to delete record")?;
        Ok(())
    }

    fn translate_insert_error(&self, entity: &E, e: rusqlite::Error) -> DataError {
        let extended_code = match &e {
            rusqlite::Error::SqliteFailure(err, _) => Some(err.extended_code),
            _ => None,
        };

        match extended_code {
            Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) | Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => {
                DataError::already_exists(E::ENTITY, entity.key())
            }
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => self.missing_parent(entity, e),
            _ => DataError::database_error("Failed to insert record", e),
        }
    }

    /// Resolves a foreign-key violation to the parent record that is
    /// actually missing. SQLite does not say which constraint fired, so
    /// each declared reference is probed in turn.
    fn missing_parent(&self, entity: &E, source: rusqlite::Error) -> DataError {
        for parent in entity.foreign_keys() {
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
                parent.table, parent.key_column
            );
            // A failed probe counts as present so the generic error below
            // carries the original violation instead of a wrong parent.
            let exists: bool = self
                .store
                .connection()
                .query_row(&sql, params![parent.key], |row| row.get(0))
                .unwrap_or(true);

            if !exists {
                return DataError::not_found(parent.entity, &parent.key);
            }
        }
        DataError::database_error("Insert violated a foreign key constraint", source)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::models::{Continent, Country};

    fn create_test_store() -> (TempDir, Arc<Store>) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store =
            Store::open(temp_dir.path().join("repo-test.db")).expect("Failed to open store");
        (temp_dir, Arc::new(store))
    }

    fn continent(code: &str) -> Continent {
        Continent {
            continent_code: code.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_exists_reports_missing_record_as_false() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Continent> = Repository::new(store);

        assert!(!repo.exists("EU").expect("Failed to check existence"));
    }

    #[test]
    fn test_get_missing_record_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Continent> = Repository::new(store);

        let err = repo.get("EU").expect_err("Get should fail");
        assert!(matches!(
            err,
            DataError::NotFound { entity: "Continent", ref key } if key == "EU"
        ));
    }

    #[test]
    fn test_duplicate_insert_is_already_exists() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Continent> = Repository::new(store);

        repo.insert(&continent("EU")).expect("Failed to insert");
        let err = repo
            .insert(&continent("EU"))
            .expect_err("Duplicate insert should fail");
        assert!(matches!(
            err,
            DataError::AlreadyExists { entity: "Continent", ref key } if key == "EU"
        ));
    }

    #[test]
    fn test_insert_with_missing_parent_names_the_parent() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Country> = Repository::new(store);

        let orphan = Country {
            country_code: "DE".to_string(),
            name: String::new(),
            continent_code: "EU".to_string(),
        };
        let err = repo
            .insert(&orphan)
            .expect_err("Insert without parent should fail");
        assert!(matches!(
            err,
            DataError::NotFound { entity: "Continent", ref key } if key == "EU"
        ));
    }

    #[test]
    fn test_update_of_missing_record_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Continent> = Repository::new(store);

        let err = repo
            .update(&continent("EU"))
            .expect_err("Update should fail");
        assert!(matches!(err, DataError::NotFound { .. }));
    }

    #[test]
    fn test_delete_shares_get_not_found_behavior() {
        let (_temp_dir, store) = create_test_store();
        let repo: Repository<Continent> = Repository::new(store);

        let err = repo.delete("EU").expect_err("Delete should fail");
        assert!(matches!(err, DataError::NotFound { .. }));
    }
}

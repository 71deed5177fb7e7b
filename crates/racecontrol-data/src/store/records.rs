//! Table bindings for the five entity types.
//!
//! Each [`Record`] implementation pairs an entity with its table: the
//! key metadata used in generated queries and domain errors, the row
//! mapping, and the insert/update statements.

use jiff::civil::Date;
use rusqlite::{Connection, Row, params, types::Type};
use uuid::Uuid;

use super::repo::{ForeignKeyRef, Record};
use crate::models::{Continent, Country, RaceMeet, Series, Track};

const INSERT_CONTINENT_SQL: &str = "INSERT INTO continents (continent_code, name) VALUES (?1, ?2)";
const UPDATE_CONTINENT_SQL: &str = "UPDATE continents SET name = ?2 WHERE continent_code = ?1";

const INSERT_COUNTRY_SQL: &str =
    "INSERT INTO countries (country_code, name, continent_code) VALUES (?1, ?2, ?3)";
const UPDATE_COUNTRY_SQL: &str =
    "UPDATE countries SET name = ?2, continent_code = ?3 WHERE country_code = ?1";

const INSERT_TRACK_SQL: &str =
    "INSERT INTO tracks (track_name, length, country_code) VALUES (?1, ?2, ?3)";
const UPDATE_TRACK_SQL: &str =
    "UPDATE tracks SET length = ?2, country_code = ?3 WHERE track_name = ?1";

const INSERT_SERIES_SQL: &str =
    "INSERT INTO series (series_name, description) VALUES (?1, ?2)";
const UPDATE_SERIES_SQL: &str = "UPDATE series SET description = ?2 WHERE series_name = ?1";

const INSERT_RACE_MEET_SQL: &str = "INSERT INTO race_meets (race_meet_id, description, track_name, series_name, start_day, end_day) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_RACE_MEET_SQL: &str = "UPDATE race_meets SET description = ?2, track_name = ?3, series_name = ?4, start_day = ?5, end_day = ?6 WHERE race_meet_id = ?1";

impl Record for Continent {
    type Key = str;

    const ENTITY: &'static str = "Continent";
    const TABLE: &'static str = "continents";
    const KEY_COLUMN: &'static str = "continent_code";
    const COLUMNS: &'static str = "continent_code, name";

    fn key(&self) -> &str {
        &self.continent_code
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            continent_code: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(INSERT_CONTINENT_SQL, params![self.continent_code, self.name])
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(UPDATE_CONTINENT_SQL, params![self.continent_code, self.name])
    }
}

impl Record for Country {
    type Key = str;

    const ENTITY: &'static str = "Country";
    const TABLE: &'static str = "countries";
    const KEY_COLUMN: &'static str = "country_code";
    const COLUMNS: &'static str = "country_code, name, continent_code";

    fn key(&self) -> &str {
        &self.country_code
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            country_code: row.get(0)?,
            name: row.get(1)?,
            continent_code: row.get(2)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            INSERT_COUNTRY_SQL,
            params![self.country_code, self.name, self.continent_code],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            UPDATE_COUNTRY_SQL,
            params![self.country_code, self.name, self.continent_code],
        )
    }

    fn foreign_keys(&self) -> Vec<ForeignKeyRef> {
        vec![ForeignKeyRef::to::<Continent>(self.continent_code.clone())]
    }
}

impl Record for Track {
    type Key = str;

    const ENTITY: &'static str = "Track";
    const TABLE: &'static str = "tracks";
    const KEY_COLUMN: &'static str = "track_name";
    const COLUMNS: &'static str = "track_name, length, country_code";

    fn key(&self) -> &str {
        &self.track_name
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            track_name: row.get(0)?,
            length: row.get(1)?,
            country_code: row.get(2)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            INSERT_TRACK_SQL,
            params![self.track_name, self.length, self.country_code],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            UPDATE_TRACK_SQL,
            params![self.track_name, self.length, self.country_code],
        )
    }

    fn foreign_keys(&self) -> Vec<ForeignKeyRef> {
        vec![ForeignKeyRef::to::<Country>(self.country_code.clone())]
    }
}

impl Record for Series {
    type Key = str;

    const ENTITY: &'static str = "Series";
    const TABLE: &'static str = "series";
    const KEY_COLUMN: &'static str = "series_name";
    const COLUMNS: &'static str = "series_name, description";

    fn key(&self) -> &str {
        &self.series_name
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            series_name: row.get(0)?,
            description: row.get(1)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(INSERT_SERIES_SQL, params![self.series_name, self.description])
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(UPDATE_SERIES_SQL, params![self.series_name, self.description])
    }
}

impl Record for RaceMeet {
    type Key = Uuid;

    const ENTITY: &'static str = "RaceMeet";
    const TABLE: &'static str = "race_meets";
    const KEY_COLUMN: &'static str = "race_meet_id";
    const COLUMNS: &'static str =
        "race_meet_id, description, track_name, series_name, start_day, end_day";

    fn key(&self) -> &Uuid {
        &self.race_meet_id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            race_meet_id: row.get(0)?,
            description: row.get(1)?,
            track_name: row.get(2)?,
            series_name: row.get(3)?,
            start_day: parse_day(row, 4)?,
            end_day: parse_day(row, 5)?,
        })
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            INSERT_RACE_MEET_SQL,
            params![
                self.race_meet_id,
                self.description,
                self.track_name,
                self.series_name,
                self.start_day.map(|d| d.to_string()),
                self.end_day.map(|d| d.to_string()),
            ],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            UPDATE_RACE_MEET_SQL,
            params![
                self.race_meet_id,
                self.description,
                self.track_name,
                self.series_name,
                self.start_day.map(|d| d.to_string()),
                self.end_day.map(|d| d.to_string()),
            ],
        )
    }

    fn foreign_keys(&self) -> Vec<ForeignKeyRef> {
        vec![
            ForeignKeyRef::to::<Track>(self.track_name.clone()),
            ForeignKeyRef::to::<Series>(self.series_name.clone()),
        ]
    }
}

/// Parses a nullable ISO-8601 day column.
fn parse_day(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| {
            s.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

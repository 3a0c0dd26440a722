// crates/locex-core/src/store.rs

//! # Gazetteer store
//!
//! Read-mostly SQLite adapter over the `locations` table: one row per locale
//! combination of continent/country/subdivision/city, plus a pre-normalized
//! `_lowercase` shadow of every text column. Lookups are always equality
//! (`=` or `IN`) against a shadow column, never prefix or range queries, so
//! matching is case- and accent-insensitive on both sides.
//!
//! Populating the table is a one-time bootstrap concern; the resolution
//! engine only ever reads.

use crate::error::{LocexError, Result};
use crate::model::LocationRecord;
use crate::text::fold_key;
use rusqlite::{params, params_from_iter, Connection, OpenFlags, Row};
use std::path::Path;
use tracing::trace;

const LOWERCASE_SUFFIX: &str = "_lowercase";

/// The eight data columns, in row order.
const SELECT_LIST: &str = "locale_code, continent_code, continent_name, \
     country_iso_code, country_name, subdivision_name, city_name, \
     is_in_european_union";

/// Logical columns the engine may query on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    ContinentName,
    CountryIsoCode,
    CountryName,
    SubdivisionName,
    CityName,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::ContinentName => "continent_name",
            Column::CountryIsoCode => "country_iso_code",
            Column::CountryName => "country_name",
            Column::SubdivisionName => "subdivision_name",
            Column::CityName => "city_name",
        }
    }

    /// The lower-cased shadow column actually used in WHERE clauses.
    pub fn shadow(self) -> &'static str {
        match self {
            Column::ContinentName => "continent_name_lowercase",
            Column::CountryIsoCode => "country_iso_code_lowercase",
            Column::CountryName => "country_name_lowercase",
            Column::SubdivisionName => "subdivision_name_lowercase",
            Column::CityName => "city_name_lowercase",
        }
    }
}

/// All queryable columns get a secondary index over their shadow.
const INDEXED_COLUMNS: [Column; 5] = [
    Column::ContinentName,
    Column::CountryIsoCode,
    Column::CountryName,
    Column::SubdivisionName,
    Column::CityName,
];

/// Queryable handle to the gazetteer database.
#[derive(Debug)]
pub struct GazetteerStore {
    conn: Connection,
}

impl GazetteerStore {
    /// Opens an existing gazetteer database.
    ///
    /// A missing file is a data-access failure, not "not found rows": the
    /// store never lazily rebuilds itself.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LocexError::NotFound(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        Ok(GazetteerStore { conn })
    }

    /// Opens a fresh in-memory store. Used by bootstrap jobs and tests.
    pub fn open_in_memory() -> Result<Self> {
        Ok(GazetteerStore {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Creates the `locations` table and its shadow-column indexes.
    ///
    /// Schema contract: the eight data columns followed by a `_lowercase`
    /// shadow of each of the seven text columns.
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE locations (
                locale_code text,
                continent_code text,
                continent_name text,
                country_iso_code text,
                country_name text,
                subdivision_name text,
                city_name text,
                is_in_european_union boolean,
                locale_code{sfx} text,
                continent_code{sfx} text,
                continent_name{sfx} text,
                country_iso_code{sfx} text,
                country_name{sfx} text,
                subdivision_name{sfx} text,
                city_name{sfx} text
            );",
            sfx = LOWERCASE_SUFFIX,
        ))?;

        for column in INDEXED_COLUMNS {
            self.conn.execute_batch(&format!(
                "CREATE INDEX {name} ON locations({shadow});",
                name = column.as_str(),
                shadow = column.shadow(),
            ))?;
        }

        Ok(())
    }

    /// Bulk-inserts records, materializing the folded shadow columns.
    ///
    /// The shadows are stored pre-normalized with [`fold_key`], which is the
    /// other half of the accent-insensitive matching contract.
    pub fn insert_records(&mut self, records: &[LocationRecord]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO locations VALUES (?,?,?,?,?,?,?,?,?,?,?,?,?,?,?)")?;
            for r in records {
                stmt.execute(params![
                    r.locale_code,
                    r.continent_code,
                    r.continent_name,
                    r.country_iso_code,
                    r.country_name,
                    r.subdivision_name,
                    r.city_name,
                    r.is_in_european_union,
                    fold_key(&r.locale_code),
                    fold_key(&r.continent_code),
                    fold_key(&r.continent_name),
                    fold_key(&r.country_iso_code),
                    fold_key(&r.country_name),
                    fold_key(&r.subdivision_name),
                    fold_key(&r.city_name),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Exact-match lookup of whole rows: `column = fold_key(value)`.
    pub fn fetch_all(&self, column: Column, value: &str) -> Result<Vec<LocationRecord>> {
        trace!(column = column.as_str(), value, "gazetteer lookup");
        let sql = format!(
            "SELECT DISTINCT {SELECT_LIST} FROM locations WHERE {} = ?",
            column.shadow(),
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([fold_key(value)], LocationRecord::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Batch (`IN`) form of [`GazetteerStore::fetch_all`].
    pub fn fetch_all_any<S: AsRef<str>>(
        &self,
        column: Column,
        values: &[S],
    ) -> Result<Vec<LocationRecord>> {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        trace!(
            column = column.as_str(),
            count = values.len(),
            "gazetteer batch lookup"
        );
        let placeholders = vec!["?"; values.len()].join(",");
        let sql = format!(
            "SELECT DISTINCT {SELECT_LIST} FROM locations WHERE {} IN ({placeholders})",
            column.shadow(),
        );
        let folded: Vec<String> = values.iter().map(|v| fold_key(v.as_ref())).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(folded.iter()), LocationRecord::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Same matching semantics as [`GazetteerStore::fetch_all`], but returns
    /// only the requested columns of the first distinct row.
    pub fn fetch_one_projected(
        &self,
        column: Column,
        value: &str,
        projection: &[Column],
    ) -> Result<Option<Vec<String>>> {
        let selected = projection
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT DISTINCT {selected} FROM locations WHERE {} = ? LIMIT 1",
            column.shadow(),
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([fold_key(value)])?;
        match rows.next()? {
            Some(row) => {
                let mut out = Vec::with_capacity(projection.len());
                for i in 0..projection.len() {
                    out.push(row.get(i)?);
                }
                Ok(Some(out))
            }
            None => Ok(None),
        }
    }
}

impl LocationRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LocationRecord {
            locale_code: row.get(0)?,
            continent_code: row.get(1)?,
            continent_name: row.get(2)?,
            country_iso_code: row.get(3)?,
            country_name: row.get(4)?,
            subdivision_name: row.get(5)?,
            city_name: row.get(6)?,
            is_in_european_union: row.get(7)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iso: &str, country: &str, subdivision: &str, city: &str) -> LocationRecord {
        LocationRecord {
            locale_code: "en".into(),
            continent_code: "EU".into(),
            continent_name: "Europe".into(),
            country_iso_code: iso.into(),
            country_name: country.into(),
            subdivision_name: subdivision.into(),
            city_name: city.into(),
            is_in_european_union: true,
        }
    }

    fn store() -> GazetteerStore {
        let mut store = GazetteerStore::open_in_memory().unwrap();
        store.create_schema().unwrap();
        store
            .insert_records(&[
                record("PL", "Poland", "Pomerania", "Gdańsk"),
                record("PL", "Poland", "Mazovia", "Warsaw"),
                record("FR", "France", "Île-de-France", "Paris"),
                record("ES", "Spain", "", ""),
            ])
            .unwrap();
        store
    }

    #[test]
    fn fetch_all_is_case_and_accent_insensitive() {
        let store = store();
        let rows = store.fetch_all(Column::CityName, "gdansk").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city_name, "Gdańsk");

        let rows = store.fetch_all(Column::SubdivisionName, "ile-de-france").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city_name, "Paris");
    }

    #[test]
    fn fetch_all_returns_empty_for_unknown_names() {
        let store = store();
        assert!(store.fetch_all(Column::CityName, "dupa").unwrap().is_empty());
    }

    #[test]
    fn fetch_all_any_uses_in_semantics() {
        let store = store();
        let rows = store
            .fetch_all_any(Column::CountryName, &["Spain", "France"])
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(store
            .fetch_all_any::<&str>(Column::CountryName, &[])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn fetch_one_projected_returns_requested_columns_only() {
        let store = store();
        let projected = store
            .fetch_one_projected(
                Column::CountryIsoCode,
                "pl",
                &[Column::CountryName, Column::ContinentName],
            )
            .unwrap();
        assert_eq!(
            projected,
            Some(vec!["Poland".to_string(), "Europe".to_string()])
        );

        let missing = store
            .fetch_one_projected(Column::CountryIsoCode, "xx", &[Column::CountryName])
            .unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn querying_without_schema_is_a_store_failure() {
        let store = GazetteerStore::open_in_memory().unwrap();
        let err = store.fetch_all(Column::CityName, "Berlin").unwrap_err();
        assert!(matches!(err, LocexError::Store(_)));
    }

    #[test]
    fn opening_a_missing_file_is_not_found() {
        let err = GazetteerStore::open("/no/such/gazetteer.db").unwrap_err();
        assert!(matches!(err, LocexError::NotFound(_)));
    }
}

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use tracing::info;

use super::schema_gen::{generate_create_table, generate_insert, generate_select_all};
use super::{Store, Stored};
use crate::books::BookRecord;
use crate::country::CountryRecord;
use crate::schema::{TableSchema, BOOKS, COUNTRIES};

pub const DEFAULT_COUNTRIES_DB: &str = "countries.db";
pub const DEFAULT_BOOKS_DB: &str = "bookstore.db";

/// Two SQLite files, one table each.
///
/// Every operation opens its file, creates the table if needed, does its
/// work and closes the connection again.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    countries_db: PathBuf,
    books_db: PathBuf,
}

impl SqliteStore {
    pub fn new(countries_db: impl Into<PathBuf>, books_db: impl Into<PathBuf>) -> Self {
        Self {
            countries_db: countries_db.into(),
            books_db: books_db.into(),
        }
    }

    pub fn countries_db(&self) -> &Path {
        &self.countries_db
    }

    pub fn books_db(&self) -> &Path {
        &self.books_db
    }
}

/// Open a database file and make sure the table exists
fn open_table(db_path: &Path, schema: &TableSchema) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database: {:?}", db_path))?;

    conn.execute(&generate_create_table(schema), [])
        .with_context(|| format!("Failed to create table: {}", schema.name))?;

    Ok(conn)
}

fn country_from_row(row: &Row) -> rusqlite::Result<Stored<CountryRecord>> {
    let population: i64 = row.get(7)?;
    Ok(Stored {
        id: row.get(0)?,
        record: CountryRecord {
            common_name: row.get(1)?,
            official_name: row.get(2)?,
            capital: row.get(3)?,
            continent: row.get(4)?,
            region: row.get(5)?,
            subregion: row.get(6)?,
            population: u64::try_from(population).unwrap_or(0),
            area: row.get(8)?,
            currency_name: row.get(9)?,
            currency_symbol: row.get(10)?,
            main_language: row.get(11)?,
            timezones: row.get(12)?,
            flag_url: row.get(13)?,
        },
    })
}

fn book_from_row(row: &Row) -> rusqlite::Result<Stored<BookRecord>> {
    Ok(Stored {
        id: row.get(0)?,
        record: BookRecord {
            title: row.get(1)?,
            price: row.get(2)?,
            rating: row.get(3)?,
            availability: row.get(4)?,
        },
    })
}

impl Store for SqliteStore {
    fn init(&self) -> Result<()> {
        open_table(&self.countries_db, &COUNTRIES)?;
        open_table(&self.books_db, &BOOKS)?;
        Ok(())
    }

    fn insert_country(&self, c: &CountryRecord) -> Result<i64> {
        let conn = open_table(&self.countries_db, &COUNTRIES)?;
        let population = i64::try_from(c.population)
            .with_context(|| format!("Population out of range for {}", c.common_name))?;

        conn.execute(
            &generate_insert(&COUNTRIES),
            params![
                c.common_name,
                c.official_name,
                c.capital,
                c.continent,
                c.region,
                c.subregion,
                population,
                c.area,
                c.currency_name,
                c.currency_symbol,
                c.main_language,
                c.timezones,
                c.flag_url,
            ],
        )
        .with_context(|| format!("Failed to insert country: {}", c.common_name))?;

        let id = conn.last_insert_rowid();
        info!(id, country = %c.common_name, "country stored");
        Ok(id)
    }

    fn insert_books(&self, books: &[BookRecord]) -> Result<usize> {
        let mut conn = open_table(&self.books_db, &BOOKS)?;
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare_cached(&generate_insert(&BOOKS))?;
            for book in books {
                stmt.execute(params![book.title, book.price, book.rating, book.availability])
                    .with_context(|| format!("Failed to insert book: {}", book.title))?;
            }
        }

        tx.commit().context("Failed to commit book batch")?;
        info!(count = books.len(), "books stored");
        Ok(books.len())
    }

    fn list_countries(&self) -> Result<Vec<Stored<CountryRecord>>> {
        let conn = open_table(&self.countries_db, &COUNTRIES)?;
        let mut stmt = conn.prepare(&generate_select_all(&COUNTRIES))?;
        let rows = stmt
            .query_map([], country_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read countries")?;
        Ok(rows)
    }

    fn list_books(&self) -> Result<Vec<Stored<BookRecord>>> {
        let conn = open_table(&self.books_db, &BOOKS)?;
        let mut stmt = conn.prepare(&generate_select_all(&BOOKS))?;
        let rows = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read books")?;
        Ok(rows)
    }
}

//! Persistent stores for countries and books

pub mod schema_gen;
pub mod sqlite;

pub use sqlite::*;

use anyhow::Result;

use crate::books::BookRecord;
use crate::country::CountryRecord;

/// A persisted record together with its surrogate key
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: i64,
    pub record: T,
}

/// Storage seam used by the ingestor, the scraper and the report.
///
/// Inserts only ever append; nothing is deduplicated or updated.
pub trait Store {
    /// Create any missing tables
    fn init(&self) -> Result<()>;

    fn insert_country(&self, country: &CountryRecord) -> Result<i64>;

    /// Append a batch atomically; returns the number of rows written
    fn insert_books(&self, books: &[BookRecord]) -> Result<usize>;

    /// All countries in insertion order
    fn list_countries(&self) -> Result<Vec<Stored<CountryRecord>>>;

    /// All books in insertion order
    fn list_books(&self) -> Result<Vec<Stored<BookRecord>>>;
}

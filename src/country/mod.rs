//! Country Ingestor: name lookup against restcountries, mapped into [`CountryRecord`]

pub mod client;
pub mod record;

pub use client::*;
pub use record::*;

use crate::error::FetchResult;

/// Anything that can resolve a country name to a single record
pub trait CountryLookup {
    fn lookup(&self, name: &str) -> FetchResult<CountryRecord>;
}

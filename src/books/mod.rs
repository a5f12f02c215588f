//! Book Scraper: first page of books.toscrape.com into [`BookRecord`]s

pub mod client;
pub mod parse;

pub use client::*;
pub use parse::*;

use crate::error::FetchResult;

/// A source of book listings
pub trait BookSource {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>>;

    /// Human-readable origin for narration
    fn describe(&self) -> String;
}

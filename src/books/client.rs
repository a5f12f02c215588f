use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

use super::parse::{parse_books, BookRecord};
use super::BookSource;
use crate::error::{check_status, FetchResult};

pub const DEFAULT_BOOKS_URL: &str = "https://books.toscrape.com/";

/// Blocking client that fetches and parses the book listing page
pub struct BooksClient {
    client: Client,
    url: String,
}

impl BooksClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("public-data-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch the raw listing page
    pub fn fetch_page(&self) -> FetchResult<String> {
        debug!(url = %self.url, "fetching book listing");

        let response = self.client.get(&self.url).send()?;
        check_status(&self.url, response.status())?;

        Ok(response.text()?)
    }
}

impl BookSource for BooksClient {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>> {
        let html = self.fetch_page()?;
        Ok(parse_books(&html))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

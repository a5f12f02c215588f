use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use super::record::{decode_lookup, CountryRecord};
use super::CountryLookup;
use crate::error::{check_status, FetchError, FetchResult};

pub const DEFAULT_API_BASE: &str = "https://restcountries.com/v3.1";

/// Blocking client for the restcountries name lookup
pub struct RestCountriesClient {
    client: Client,
    base: Url,
}

impl RestCountriesClient {
    pub fn new(api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("public-data-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        let base = Url::parse(api_base)
            .with_context(|| format!("Invalid country API base URL: {}", api_base))?;
        Ok(Self { client, base })
    }

    /// Build `{base}/name/{name}` with the name as a single encoded path segment
    fn lookup_url(&self, name: &str) -> FetchResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Malformed(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .push("name")
            .push(name);
        Ok(url)
    }
}

impl CountryLookup for RestCountriesClient {
    fn lookup(&self, name: &str) -> FetchResult<CountryRecord> {
        let url = self.lookup_url(name)?;
        debug!(%url, "looking up country");

        let response = self.client.get(url.clone()).send()?;
        check_status(url.as_str(), response.status())?;

        let body = response.text()?;
        decode_lookup(&body, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_encodes_name() {
        let client = RestCountriesClient::new(DEFAULT_API_BASE).unwrap();
        let url = client.lookup_url("United States").unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/United%20States"
        );
    }

    #[test]
    fn test_lookup_url_with_trailing_slash_base() {
        let client = RestCountriesClient::new("http://localhost:8080/v3.1/").unwrap();
        let url = client.lookup_url("peru").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v3.1/name/peru");
    }

    #[test]
    fn test_invalid_base() {
        assert!(RestCountriesClient::new("not a url").is_err());
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Recoverable failures of a single lookup or scrape.
///
/// The pipeline reports these and skips the affected unit of work;
/// anything else (storage, report output) is an `anyhow::Error` that ends the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no country matched '{0}'")]
    NoMatch(String),

    #[error("country name is blank")]
    BlankName,
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Map a non-2xx response status to [`FetchError::Status`]
pub fn check_status(url: &str, status: StatusCode) -> FetchResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status,
        })
    }
}

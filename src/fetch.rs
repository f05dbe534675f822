use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP GET with the client's default timeout and redirect policy.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start_time = Instant::now();
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(parsed).send().map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                action = "fetch",
                component = "http",
                url = url,
                status = status.as_u16(),
                "Non-success status, using body anyway"
            );
        }

        let body = response.text().map_err(request_error)?;
        debug!(
            action = "complete",
            component = "http",
            url = url,
            bytes = body.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Fetched page"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_rejected_before_any_request() {
        let fetcher = HttpFetcher::new();
        let err = fetcher.fetch("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}

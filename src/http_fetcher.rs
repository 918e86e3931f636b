//! Blocking HTTP retrieval of response bodies
//!
//! The fetcher issues a single GET per call and hands back the complete body
//! as text. It blocks the calling thread for up to the configured timeouts,
//! so callers that need to stay responsive must run it on a worker thread.

use crate::config::FetchConfig;
use crate::request_url::RequestUrl;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors that can occur while fetching a response body
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The runtime driving the request could not be started
    #[error("Failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// Connection, DNS, timeout or other transport failure
    #[error("Network error while fetching {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// The response body was not valid UTF-8
    #[error("Response from {url} is not valid UTF-8: {reason}")]
    InvalidEncoding { url: String, reason: String },
}

impl FetchError {
    /// Returns true if the failure was caused by a connect or read timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Network { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Returns the HTTP status code for non-success responses
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Performs blocking GET requests with bounded timeouts
///
/// The connect timeout limits establishing the connection. The read timeout
/// limits each individual read and restarts after every successful one, so a
/// slow but steady response is never cut off. Idle connection pooling is
/// disabled, so every connection is closed once its response is dropped.
///
/// Each call drives the request on its own single-threaded runtime. `fetch`
/// must not be called from inside an async runtime.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher using the given timeouts
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Fetches the full response body for `url`
    ///
    /// Only a `200 OK` response counts as success. Any other status is
    /// reported as `FetchError::HttpStatus` and its body is discarded.
    ///
    /// # Returns
    ///
    /// The entire body decoded as UTF-8
    pub fn fetch(&self, url: &RequestUrl) -> Result<String, FetchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        runtime.block_on(self.fetch_async(url))
    }

    async fn fetch_async(&self, url: &RequestUrl) -> Result<String, FetchError> {
        let url_string = url.to_string();
        debug!(url = %url_string, "Sending GET request");

        let response = self
            .client
            .get(url.clone().into_url())
            .send()
            .await
            .map_err(|e| {
                error!(url = %url_string, timeout = e.is_timeout(), "Problem making the HTTP request: {e}");
                FetchError::Network {
                    url: url_string.clone(),
                    source: e,
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url_string, status = status.as_u16(), "Error response code");
            return Err(FetchError::HttpStatus {
                url: url_string,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(url = %url_string, timeout = e.is_timeout(), "Problem reading the response body: {e}");
            FetchError::Network {
                url: url_string.clone(),
                source: e,
            }
        })?;

        let body = String::from_utf8(Vec::from(bytes)).map_err(|e| {
            warn!(url = %url_string, "Response body is not valid UTF-8");
            FetchError::InvalidEncoding {
                url: url_string.clone(),
                reason: e.to_string(),
            }
        })?;

        debug!(url = %url_string, bytes = body.len(), "Received response body");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_config() {
        assert!(HttpFetcher::new(FetchConfig::default()).is_ok());
    }

    #[test]
    fn test_error_accessors() {
        let err = FetchError::HttpStatus {
            url: "http://localhost/movies".to_string(),
            status: 404,
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "HTTP 404 while fetching http://localhost/movies");

        let err = FetchError::InvalidEncoding {
            url: "http://localhost/movies".to_string(),
            reason: "invalid utf-8 sequence".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}

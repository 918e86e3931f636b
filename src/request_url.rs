//! Request URL validation
//!
//! Turns a caller supplied string into a `RequestUrl` before any network
//! access happens. A string that is not an absolute http(s) URL never makes
//! it past this point.

use reqwest::Url;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while building a request URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlBuildError {
    /// The input was empty or only whitespace
    #[error("URL is empty")]
    Empty,

    /// The input could not be parsed as an absolute URL
    #[error("Malformed URL '{input}': {reason}")]
    Malformed { input: String, reason: String },

    /// The URL uses a scheme other than http or https
    #[error("Unsupported URL scheme '{scheme}' in '{input}'")]
    UnsupportedScheme { input: String, scheme: String },
}

/// A validated absolute http(s) URL, ready to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(Url);

impl RequestUrl {
    /// Parses and validates a URL string
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_fetch::RequestUrl;
    ///
    /// let url = RequestUrl::parse("https://api.themoviedb.org/3/movie/550").unwrap();
    /// assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/550");
    ///
    /// assert!(RequestUrl::parse("not a url").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, UrlBuildError> {
        if input.trim().is_empty() {
            return Err(UrlBuildError::Empty);
        }

        let url = Url::parse(input).map_err(|e| UrlBuildError::Malformed {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(UrlBuildError::UnsupportedScheme {
                    input: input.to_string(),
                    scheme: other.to_string(),
                });
            }
        }

        Ok(Self(url))
    }

    /// Returns the normalized string form of the URL
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the handle, returning the underlying `Url`
    pub(crate) fn into_url(self) -> Url {
        self.0
    }
}

impl FromStr for RequestUrl {
    type Err = UrlBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls_round_trip() {
        let inputs = [
            "https://api.themoviedb.org/3/movie/popular?api_key=abc123&page=1",
            "http://localhost:8080/movies",
            "https://example.com/3/search/movie?query=the%20matrix",
            "http://127.0.0.1:3000/",
        ];

        for input in inputs {
            let url = RequestUrl::parse(input).unwrap();
            assert_eq!(url.as_str(), input);
            assert_eq!(url.to_string(), input);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(RequestUrl::parse(""), Err(UrlBuildError::Empty));
        assert_eq!(RequestUrl::parse("   "), Err(UrlBuildError::Empty));
    }

    #[test]
    fn test_missing_scheme() {
        let err = RequestUrl::parse("api.themoviedb.org/3/movie/550").unwrap_err();
        assert!(matches!(err, UrlBuildError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_characters() {
        let err = RequestUrl::parse("http://exa mple.com/").unwrap_err();
        assert!(matches!(err, UrlBuildError::Malformed { .. }));
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = RequestUrl::parse("ftp://example.com/movies.json").unwrap_err();
        assert_eq!(
            err,
            UrlBuildError::UnsupportedScheme {
                input: "ftp://example.com/movies.json".to_string(),
                scheme: "ftp".to_string(),
            }
        );

        let err = RequestUrl::parse("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, UrlBuildError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_missing_host() {
        assert_eq!(
            RequestUrl::parse("http://"),
            Err(UrlBuildError::Malformed {
                input: "http://".to_string(),
                reason: "empty host".to_string(),
            })
        );
    }

    #[test]
    fn test_from_str() {
        let url: RequestUrl = "https://example.com/movie/1".parse().unwrap();
        assert_eq!(url.as_str(), "https://example.com/movie/1");
    }
}

//! movie_fetch - Retrieve movie metadata from a JSON HTTP API
//!
//! This library takes a fully formed request URL, fetches the response body
//! over blocking HTTP and decodes it into typed records: a list of
//! `MovieSummary` values for search/discovery endpoints, or a single
//! `MovieDetail` for a movie's detail endpoint.
//!
//! Every call is synchronous and self-contained. Nothing is cached or shared
//! between calls, so concurrent calls from different threads need no
//! coordination. Callers with a thread that must stay responsive should run
//! these functions on a worker thread and hand the result back themselves.

mod config;
mod http_fetcher;
mod movie_decoding;
mod request_url;

// Re-export building blocks
pub use config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, FetchConfig};
pub use http_fetcher::{FetchError, HttpFetcher};
pub use movie_decoding::{
    DecodeError, MovieDetail, MovieSummary, decode_movie_detail, decode_movie_list,
};
pub use request_url::{RequestUrl, UrlBuildError};

use thiserror::Error;
use tracing::debug;

/// Top-level error type for movie fetch operations
#[derive(Debug, Error)]
pub enum MovieFetchError {
    /// The request URL could not be built
    #[error("URL error: {0}")]
    UrlBuild(#[from] UrlBuildError),

    /// The response body could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Trait for sources that can provide movie lists and movie details.
pub trait MovieProvider {
    /// Fetches and decodes a movie list from `request_url`.
    fn fetch_movie_list(&self, request_url: &str) -> Result<Vec<MovieSummary>, MovieFetchError>;

    /// Fetches and decodes a single movie's details from `request_url`.
    fn fetch_movie_details(&self, request_url: &str) -> Result<MovieDetail, MovieFetchError>;
}

/// Movie provider backed by a blocking HTTP fetcher
///
/// The client holds no per-request state; one instance can be reused for any
/// number of calls, or a fresh one created per call.
#[derive(Debug, Clone)]
pub struct MovieClient {
    fetcher: HttpFetcher,
}

impl MovieClient {
    /// Creates a client using the given timeouts
    pub fn new(config: FetchConfig) -> Result<Self, MovieFetchError> {
        Ok(Self {
            fetcher: HttpFetcher::new(config)?,
        })
    }

    /// Builds the URL and fetches its body, the shared front half of both flows
    fn fetch_body(&self, request_url: &str) -> Result<String, MovieFetchError> {
        let url = RequestUrl::parse(request_url)?;
        let body = self.fetcher.fetch(&url)?;
        Ok(body)
    }
}

impl MovieProvider for MovieClient {
    fn fetch_movie_list(&self, request_url: &str) -> Result<Vec<MovieSummary>, MovieFetchError> {
        let body = self.fetch_body(request_url)?;
        let movies = decode_movie_list(&body)?;

        debug!(count = movies.len(), "Fetched movie list");

        Ok(movies)
    }

    fn fetch_movie_details(&self, request_url: &str) -> Result<MovieDetail, MovieFetchError> {
        let body = self.fetch_body(request_url)?;
        let detail = decode_movie_detail(&body)?;

        debug!(empty = detail.is_empty(), "Fetched movie details");

        Ok(detail)
    }
}

/// Fetches a movie list using the default timeouts
///
/// Builds a `RequestUrl` from `request_url`, performs a blocking GET and
/// decodes the body's `results` array. The first failure stops the pipeline.
///
/// # Examples
///
/// ```no_run
/// use movie_fetch::fetch_movie_list;
///
/// let movies = fetch_movie_list(
///     "https://api.themoviedb.org/3/movie/popular?api_key=YOUR_KEY",
/// ).unwrap();
///
/// for movie in movies {
///     println!("{} - {}", movie.id, movie.title);
/// }
/// ```
pub fn fetch_movie_list(request_url: &str) -> Result<Vec<MovieSummary>, MovieFetchError> {
    MovieClient::new(FetchConfig::default())?.fetch_movie_list(request_url)
}

/// Fetches a single movie's details using the default timeouts
///
/// # Examples
///
/// ```no_run
/// use movie_fetch::fetch_movie_details;
///
/// let detail = fetch_movie_details(
///     "https://api.themoviedb.org/3/movie/550?api_key=YOUR_KEY",
/// ).unwrap();
///
/// println!("{:?} ({:?})", detail.title, detail.release_date);
/// ```
pub fn fetch_movie_details(request_url: &str) -> Result<MovieDetail, MovieFetchError> {
    MovieClient::new(FetchConfig::default())?.fetch_movie_details(request_url)
}

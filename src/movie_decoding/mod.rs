/// Data structures and decoders for movie API responses.
///
/// This module provides the typed records handed to callers (`MovieSummary`
/// for list endpoints, `MovieDetail` for a single movie) and the functions
/// that turn raw response bodies into them.
mod detail;
mod list;
mod tmdb_types;

pub use detail::decode_movie_detail;
pub use list::decode_movie_list;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while decoding a response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not syntactically valid JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The body is valid JSON but not an object
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A list response has no `results` field
    #[error("Response has no 'results' field")]
    MissingResults,

    /// The `results` field of a list response is not an array
    #[error("Field 'results' is not an array, found {0}")]
    ResultsNotArray(&'static str),

    /// A required detail field is missing or has the wrong type
    #[error("Invalid movie detail: {0}")]
    InvalidField(#[source] serde_json::Error),
}

/// A movie as it appears in search and discovery results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// The API's identifier for the movie
    pub id: i64,
    /// The movie title
    pub title: String,
    /// Backdrop image path as returned by the API (usually relative)
    pub backdrop_path: String,
}

/// The detail record for a single movie.
///
/// All fields are `None` only for the empty record produced from an empty
/// response body; a successfully decoded record has every field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// The movie title
    pub title: Option<String>,
    /// Plot overview
    pub overview: Option<String>,
    /// Release date exactly as the API sent it
    pub release_date: Option<String>,
    /// Poster image path as returned by the API
    pub poster_path: Option<String>,
    /// Average rating in its textual JSON form, e.g. "7.3"
    pub vote_average: Option<String>,
}

impl MovieDetail {
    /// Returns true if no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.overview.is_none()
            && self.release_date.is_none()
            && self.poster_path.is_none()
            && self.vote_average.is_none()
    }
}

/// Parses `body` and requires the top-level value to be an object.
fn parse_object(body: &str) -> Result<Map<String, Value>, DecodeError> {
    match serde_json::from_str::<Value>(body).map_err(DecodeError::InvalidJson)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

/// Name of a JSON value's type, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

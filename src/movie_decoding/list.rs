/// Decoding of movie list responses.
use super::tmdb_types::TmdbMovieListItem;
use super::{DecodeError, MovieSummary, json_kind, parse_object};
use serde_json::Value;
use tracing::{debug, warn};

impl From<TmdbMovieListItem> for MovieSummary {
    fn from(item: TmdbMovieListItem) -> Self {
        MovieSummary {
            id: item.id,
            title: item.title,
            backdrop_path: item.backdrop_path,
        }
    }
}

/// Decodes a list response into movie summaries.
///
/// The body must be a JSON object holding a `results` array. Elements that
/// lack `id`, `title` or `backdrop_path`, or carry them with the wrong type,
/// are logged and skipped; the remaining elements keep their array order.
///
/// # Returns
///
/// An empty vector for an empty or whitespace-only body, the decoded movies
/// otherwise, or a `DecodeError` if the body itself has the wrong shape.
pub fn decode_movie_list(body: &str) -> Result<Vec<MovieSummary>, DecodeError> {
    if body.trim().is_empty() {
        debug!("Empty list response, nothing to decode");
        return Ok(Vec::new());
    }

    let mut root = parse_object(body)?;

    let results = match root.remove("results") {
        Some(Value::Array(results)) => results,
        Some(other) => return Err(DecodeError::ResultsNotArray(json_kind(&other))),
        None => return Err(DecodeError::MissingResults),
    };

    let total = results.len();
    let mut movies = Vec::with_capacity(total);

    for (index, element) in results.into_iter().enumerate() {
        match serde_json::from_value::<TmdbMovieListItem>(element) {
            Ok(item) => movies.push(MovieSummary::from(item)),
            Err(e) => warn!(index, "Skipping malformed movie entry: {e}"),
        }
    }

    debug!(decoded = movies.len(), total, "Decoded movie list");

    Ok(movies)
}

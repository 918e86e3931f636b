/// Movie API response types for deserialization.
///
/// These structures mirror the JSON shapes the list and detail endpoints
/// return. Every field is required; a missing field fails deserialization.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of a list response's `results` array.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbMovieListItem {
    /// Integer identifier; floats and numeric strings are rejected
    pub id: i64,
    pub title: String,
    pub backdrop_path: String,
}

/// The top-level object of a detail response.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbMovieDetails {
    pub title: String,
    pub poster_path: String,
    pub release_date: String,
    pub overview: String,
    /// Usually a JSON number, occasionally a string
    #[serde(deserialize_with = "text_or_number")]
    pub vote_average: String,
}

/// Accepts a JSON string or number and keeps its textual form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(D::Error::custom(format!(
            "invalid type: {other}, expected a string or a number"
        ))),
    }
}

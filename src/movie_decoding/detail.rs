/// Decoding of single movie detail responses.
use super::tmdb_types::TmdbMovieDetails;
use super::{DecodeError, MovieDetail, parse_object};
use serde_json::Value;
use tracing::debug;

impl From<TmdbMovieDetails> for MovieDetail {
    fn from(details: TmdbMovieDetails) -> Self {
        MovieDetail {
            title: Some(details.title),
            overview: Some(details.overview),
            release_date: Some(details.release_date),
            poster_path: Some(details.poster_path),
            vote_average: Some(details.vote_average),
        }
    }
}

/// Decodes a detail response into a `MovieDetail`.
///
/// The body must be a JSON object with `title`, `poster_path`,
/// `release_date`, `overview` and `vote_average` at the top level. String
/// values are kept verbatim; a numeric `vote_average` keeps its JSON text.
///
/// # Returns
///
/// `MovieDetail::default()` (every field `None`) for an empty or
/// whitespace-only body, a fully populated record on success, or a
/// `DecodeError` if the body is malformed or a field is missing.
pub fn decode_movie_detail(body: &str) -> Result<MovieDetail, DecodeError> {
    if body.trim().is_empty() {
        debug!("Empty detail response, returning empty record");
        return Ok(MovieDetail::default());
    }

    let root = parse_object(body)?;

    let details: TmdbMovieDetails =
        serde_json::from_value(Value::Object(root)).map_err(DecodeError::InvalidField)?;

    debug!(poster_path = %details.poster_path, "Decoded movie detail");

    Ok(MovieDetail::from(details))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DETAIL: &str = r#"{
        "adult": false,
        "title": "Fight Club",
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "release_date": "1999-10-15",
        "overview": "A ticking-time-bomb insomniac and a slippery soap salesman...",
        "vote_average": "8.433",
        "runtime": 139
    }"#;

    #[test]
    fn test_decodes_all_fields_verbatim() {
        let detail = decode_movie_detail(FULL_DETAIL).unwrap();

        assert_eq!(
            detail,
            MovieDetail {
                title: Some("Fight Club".to_string()),
                overview: Some(
                    "A ticking-time-bomb insomniac and a slippery soap salesman...".to_string()
                ),
                release_date: Some("1999-10-15".to_string()),
                poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
                vote_average: Some("8.433".to_string()),
            }
        );
    }

    #[test]
    fn test_numeric_vote_average_keeps_text() {
        let body = r#"{"title":"Heat","poster_path":"/heat.jpg","release_date":"1995-12-15","overview":"","vote_average":7.9}"#;

        let detail = decode_movie_detail(body).unwrap();

        assert_eq!(detail.vote_average.as_deref(), Some("7.9"));
        assert_eq!(detail.overview.as_deref(), Some(""));

        let body = r#"{"title":"Heat","poster_path":"/heat.jpg","release_date":"1995-12-15","overview":"","vote_average":8}"#;
        assert_eq!(
            decode_movie_detail(body).unwrap().vote_average.as_deref(),
            Some("8")
        );
    }

    #[test]
    fn test_release_date_is_not_validated() {
        let body = r#"{"title":"Unknown","poster_path":"","release_date":"sometime soon","overview":"","vote_average":"n/a"}"#;

        let detail = decode_movie_detail(body).unwrap();

        assert_eq!(detail.release_date.as_deref(), Some("sometime soon"));
        assert_eq!(detail.vote_average.as_deref(), Some("n/a"));
    }

    #[test]
    fn test_empty_body_yields_empty_record() {
        let detail = decode_movie_detail("").unwrap();
        assert!(detail.is_empty());
        assert_eq!(detail, MovieDetail::default());

        assert!(decode_movie_detail("   ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = decode_movie_detail("{\"title\": \"Heat\"").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let body = r#"{"title":"Heat","poster_path":"/heat.jpg","release_date":"1995-12-15","vote_average":7.9}"#;

        let err = decode_movie_detail(body).unwrap_err();

        assert!(matches!(err, DecodeError::InvalidField(_)));
        assert!(err.to_string().contains("overview"));
    }

    #[test]
    fn test_wrongly_typed_fields_are_errors() {
        let null_poster = r#"{"title":"Heat","poster_path":null,"release_date":"1995-12-15","overview":"","vote_average":7.9}"#;
        assert!(matches!(
            decode_movie_detail(null_poster),
            Err(DecodeError::InvalidField(_))
        ));

        let bool_vote = r#"{"title":"Heat","poster_path":"/heat.jpg","release_date":"1995-12-15","overview":"","vote_average":true}"#;
        assert!(matches!(
            decode_movie_detail(bool_vote),
            Err(DecodeError::InvalidField(_))
        ));
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(matches!(
            decode_movie_detail(r#"["Heat"]"#),
            Err(DecodeError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_repeated_decoding_is_identical() {
        let first = decode_movie_detail(FULL_DETAIL).unwrap();
        let second = decode_movie_detail(FULL_DETAIL).unwrap();
        assert_eq!(first, second);
    }
}

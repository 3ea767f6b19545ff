//! Movie record and field resolution.
//!
//! The public endpoint is loosely typed: depending on the source a record
//! may carry `title` or `original_title`, `overview` or `plot`, and numbers
//! as either JSON numbers or strings. Each displayed value is resolved from
//! an ordered list of candidate keys, taking the first truthy one.

use serde_json::{Map, Value};

use super::error::FetchError;

/// Base URL prepended to a relative `poster_path`.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// Display-ready movie record. Every field is optional since the API may
/// omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<String>,
    pub vote_count: Option<String>,
    pub poster_url: Option<String>,
}

impl Movie {
    /// Resolve a movie from a single JSON object.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let poster_url = pick(obj, &["poster_path"])
            .map(|p| format!("{TMDB_IMAGE_BASE}{p}"))
            .or_else(|| pick(obj, &["poster"]));
        Movie {
            title: pick(obj, &["title", "original_title"]),
            release_date: pick(obj, &["release_date"]),
            overview: pick(obj, &["overview", "plot"]),
            vote_average: pick(obj, &["vote_average", "rating"]),
            vote_count: pick(obj, &["vote_count", "votes"]),
            poster_url,
        }
    }

    /// Resolve the first element of a JSON array body.
    pub fn from_response(body: &Value) -> Result<Self, FetchError> {
        let items = body
            .as_array()
            .ok_or_else(|| FetchError::Shape("expected a JSON array".to_string()))?;
        let first = items
            .first()
            .ok_or_else(|| FetchError::Shape("empty movie list".to_string()))?;
        let obj = first
            .as_object()
            .ok_or_else(|| FetchError::Shape("first element is not an object".to_string()))?;
        Ok(Self::from_object(obj))
    }

    pub fn from_json_str(s: &str) -> Result<Self, FetchError> {
        let body: Value = serde_json::from_str(s)?;
        Self::from_response(&body)
    }
}

fn pick(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(display_value))
}

// null, "", 0 and false count as missing
fn display_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_primary_fields() {
        let body = json!([{
            "title": "Alien",
            "original_title": "Alien (orig)",
            "release_date": "1979-05-25",
            "overview": "In space...",
            "vote_average": 8.1,
            "vote_count": 12000,
            "poster_path": "/alien.jpg"
        }]);
        let m = Movie::from_response(&body).unwrap();
        assert_eq!(m.title.as_deref(), Some("Alien"));
        assert_eq!(m.overview.as_deref(), Some("In space..."));
        assert_eq!(m.vote_average.as_deref(), Some("8.1"));
        assert_eq!(m.vote_count.as_deref(), Some("12000"));
        assert_eq!(
            m.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/original/alien.jpg")
        );
    }

    #[test]
    fn falls_back_on_missing_or_falsy_fields() {
        let body = json!([{
            "title": "",
            "original_title": "Le Samouraï",
            "plot": "A hitman...",
            "vote_average": 0,
            "rating": "7.9",
            "votes": "321",
            "poster_path": null,
            "poster": "https://img.example/samourai.png"
        }]);
        let m = Movie::from_response(&body).unwrap();
        assert_eq!(m.title.as_deref(), Some("Le Samouraï"));
        assert_eq!(m.overview.as_deref(), Some("A hitman..."));
        assert_eq!(m.vote_average.as_deref(), Some("7.9"));
        assert_eq!(m.vote_count.as_deref(), Some("321"));
        assert_eq!(m.poster_url.as_deref(), Some("https://img.example/samourai.png"));
        assert_eq!(m.release_date, None);
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(matches!(Movie::from_response(&json!({})), Err(FetchError::Shape(_))));
        assert!(matches!(Movie::from_response(&json!([])), Err(FetchError::Shape(_))));
        assert!(matches!(Movie::from_response(&json!([1])), Err(FetchError::Shape(_))));
        assert!(matches!(Movie::from_json_str("not json"), Err(FetchError::Json(_))));
    }
}

use super::error::FetchError;
use super::model::Movie;

/// Lifecycle of the startup fetch.
///
/// `Loading` is the only state with outgoing transitions; once the fetch
/// settles the state is final for the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MovieState {
    #[default]
    Loading,
    Ready(Movie),
    Failed(String),
}

impl MovieState {
    /// Apply the fetch outcome. Returns `false` when the state had already
    /// settled, in which case `result` is dropped.
    pub fn settle(&mut self, result: Result<Movie, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(movie) => MovieState::Ready(movie),
            Err(e) => MovieState::Failed(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MovieState::Loading)
    }

    pub fn movie(&self) -> Option<&Movie> {
        match self {
            MovieState::Ready(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie { title: Some(title.to_string()), ..Movie::default() }
    }

    #[test]
    fn loading_settles_to_ready() {
        let mut s = MovieState::default();
        assert!(s.settle(Ok(movie("Heat"))));
        assert_eq!(s.movie().and_then(|m| m.title.as_deref()), Some("Heat"));
    }

    #[test]
    fn failure_is_terminal() {
        let mut s = MovieState::Loading;
        assert!(s.settle(Err(FetchError::Shape("empty movie list".into()))));
        assert!(matches!(&s, MovieState::Failed(msg) if msg.contains("empty movie list")));

        assert!(!s.settle(Ok(movie("late"))));
        assert!(matches!(s, MovieState::Failed(_)));
    }

    #[test]
    fn ready_ignores_second_result() {
        let mut s = MovieState::Loading;
        s.settle(Ok(movie("first")));
        assert!(!s.settle(Ok(movie("second"))));
        assert_eq!(s.movie().and_then(|m| m.title.as_deref()), Some("first"));
    }
}

//! Loading the movie shown on the card: the record type, where it comes
//! from, and the one-shot state machine the UI renders from.

pub mod error;
pub mod model;
pub mod source;
pub mod state;

pub use error::FetchError;
pub use model::Movie;
pub use source::{spawn_fetch, FileMovieSource, HttpMovieSource, MovieSource};
pub use state::MovieState;

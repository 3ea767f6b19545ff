pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
pub mod movie;
pub mod review;
pub mod runner;
pub mod ui;

pub use crate::app::{App, CommentForm, Focus, Mode};
pub use crate::movie::{Movie, MovieState};
pub use crate::review::{Comment, CommentStore};

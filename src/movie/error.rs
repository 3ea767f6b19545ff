use thiserror::Error;
use std::path::PathBuf;

/// Errors produced while loading the movie record.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request failed (transport error, timeout or non-2xx status).
    #[error("request to `{url}` failed: {msg}")]
    Http { url: String, msg: String },

    /// Reading the response body or a local movie file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Local movie file could not be read.
    #[error("failed to read `{path}`: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The fetch thread went away without reporting a result.
    #[error("fetch worker exited without a result")]
    Aborted,

    /// The JSON did not have the expected shape.
    #[error("unexpected response: {0}")]
    Shape(String),
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        let url = match &e {
            ureq::Error::Status(_, resp) => resp.get_url().to_string(),
            ureq::Error::Transport(t) => t.url().map(|u| u.to_string()).unwrap_or_default(),
        };
        FetchError::Http { url, msg: e.to_string() }
    }
}

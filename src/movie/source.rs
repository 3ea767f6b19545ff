use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::Duration;

use super::error::FetchError;
use super::model::Movie;

pub const DEFAULT_ENDPOINT: &str = "https://jsonfakery.com/movies/random/1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Something that can produce the one movie shown for this session.
pub trait MovieSource: Send {
    fn fetch(&self) -> Result<Movie, FetchError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Fetches a random movie over HTTP.
pub struct HttpMovieSource {
    url: String,
    timeout: Duration,
}

impl HttpMovieSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self { url: url.into(), timeout }
    }
}

impl Default for HttpMovieSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl MovieSource for HttpMovieSource {
    fn fetch(&self) -> Result<Movie, FetchError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let resp = agent
            .get(&self.url)
            .set("User-Agent", concat!("cineZoom/", env!("CARGO_PKG_VERSION")))
            .set("Accept", "application/json")
            .call()?;
        let mut body = String::new();
        resp.into_reader().read_to_string(&mut body)?;
        Movie::from_json_str(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the same JSON payload from a local file. Handy offline.
pub struct FileMovieSource {
    path: PathBuf,
}

impl FileMovieSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieSource for FileMovieSource {
    fn fetch(&self) -> Result<Movie, FetchError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| FetchError::File {
            path: self.path.clone(),
            source,
        })?;
        Movie::from_json_str(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Run `source.fetch()` on a background thread and send exactly one result
/// to `tx`. The UI thread picks it up with `try_recv`.
pub fn spawn_fetch(
    source: Box<dyn MovieSource>,
    tx: Sender<Result<Movie, FetchError>>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let origin = source.describe();
        tracing::info!(source = %origin, "fetching movie");
        let result = source.fetch();
        match &result {
            Ok(m) => tracing::info!(title = ?m.title, "movie loaded"),
            Err(e) => tracing::error!(source = %origin, "movie fetch failed: {e}"),
        }
        if tx.send(result).is_err() {
            tracing::debug!("movie receiver closed before fetch completed");
        }
    })
}

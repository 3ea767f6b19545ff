use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use cineZoom::app::settings::{self, Settings};
use cineZoom::logging::{self, LogConfig};
use cineZoom::movie::{FileMovieSource, HttpMovieSource, MovieSource};
use cineZoom::runner::{run_app, RunConfig};
use cineZoom::ui::ThemeName;

/// Terminal movie card with star-rated comments.
#[derive(Debug, Parser)]
#[command(name = "cineZoom", version, about)]
struct Cli {
    /// Movie API endpoint returning a JSON array of movies.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Load the movie JSON from a file instead of the network.
    #[arg(long, value_name = "PATH", conflicts_with = "endpoint")]
    movie_file: Option<PathBuf>,

    /// HTTP timeout for the movie fetch.
    #[arg(long, value_name = "N")]
    timeout_secs: Option<u64>,

    /// Start with this theme (overrides the saved preference for this run).
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Settings file to read and to save the theme preference into.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Directory for log files.
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,

    /// Default log filter (overridden by CINEZOOM_LOG).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Disable file logging.
    #[arg(long)]
    no_log: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = if cli.no_log {
        None
    } else {
        let config = LogConfig {
            dir: cli.log_dir.clone().unwrap_or_else(logging::default_dir),
            level: cli.log_level.clone(),
        };
        match logging::init(&config) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("cineZoom: logging disabled: {e:#}");
                None
            }
        }
    };

    let settings_path = cli.settings.clone().or_else(settings::default_settings_path);
    let file_settings = match &settings_path {
        Some(path) => settings::load_or_default(path),
        None => Settings::default(),
    };
    let mut settings = file_settings.clone();
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        settings.timeout_secs = secs;
    }

    let source: Box<dyn MovieSource> = match &cli.movie_file {
        Some(path) => Box::new(FileMovieSource::new(path)),
        None => Box::new(HttpMovieSource::new(
            settings.endpoint.clone(),
            Duration::from_secs(settings.timeout_secs),
        )),
    };

    tracing::info!(
        theme = %settings.theme,
        settings = ?settings_path,
        "starting cineZoom"
    );
    run_app(RunConfig { settings, file_settings, settings_path, source })
}

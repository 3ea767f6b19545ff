//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a daily rolling file in
//! the log directory and never to stdout/stderr. `log` records emitted by
//! dependencies (ureq) are bridged into tracing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

pub const LOG_FILE_PREFIX: &str = "cinezoom.log";
/// Environment variable overriding the filter, e.g. `CINEZOOM_LOG=debug`.
pub const LOG_ENV_VAR: &str = "CINEZOOM_LOG";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    /// Default directive when `CINEZOOM_LOG` is not set.
    pub level: String,
}

/// Keeps the non-blocking writer alive; drop it last so buffered lines are
/// flushed on exit.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    pub dir: PathBuf,
}

pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once, before the UI starts.
pub fn init(config: &LogConfig) -> anyhow::Result<LogGuard> {
    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create log dir {}", config.dir.display()))?;

    let appender = tracing_appender::rolling::daily(&config.dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = Registry::default().with(build_filter(&config.level)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true),
    );
    tracing::subscriber::set_global_default(subscriber)
        .context("a global tracing subscriber is already installed")?;
    tracing_log::LogTracer::init().context("failed to bridge `log` records into tracing")?;

    tracing::info!(dir = %config.dir.display(), version = env!("CARGO_PKG_VERSION"), "logging initialised");
    Ok(LogGuard { _guard: guard, dir: config.dir.clone() })
}

/// Log directory used when none is given: the per-user cache dir, or a
/// `logs` folder next to the working directory as a last resort.
pub fn default_dir() -> PathBuf {
    crate::app::settings::default_log_dir().unwrap_or_else(|| Path::new("logs").to_path_buf())
}

use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "cineZoom", "cineZoom")
}

/// Per-user configuration directory (holds `settings.toml`).
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory. Log files go under `logs/` here.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}

/// Default log directory.
pub fn default_log_dir() -> Option<PathBuf> {
    user_cache_dir().map(|d| d.join("logs"))
}

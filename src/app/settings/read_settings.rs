use std::path::Path;

use super::write_settings::{Settings, SettingsError};

/// Read settings from `path`. A missing file yields the defaults; a file
/// that exists but does not parse is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_settings_from`] but falls back to defaults on any error,
/// logging a warning.
pub fn load_or_default(path: &Path) -> Settings {
    match load_settings_from(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("settings load failed, using defaults: {e}");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::save_settings_to;
    use crate::ui::themes::ThemeName;
    use assert_fs::prelude::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.theme, ThemeName::Dark);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("theme = \"light\"\n\n[keybinds]\nsubmit = [\"f10\"]\n").unwrap();

        let s = load_settings_from(f.path()).unwrap();
        assert_eq!(s.theme, ThemeName::Light);
        assert_eq!(s.timeout_secs, Settings::default().timeout_secs);
        assert_eq!(s.keybinds.get("submit"), Some(&vec!["f10".to_string()]));
    }

    #[test]
    fn malformed_file_is_an_error_but_load_or_default_recovers() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("theme = [[[").unwrap();

        assert!(matches!(load_settings_from(f.path()), Err(SettingsError::Parse { .. })));
        assert_eq!(load_or_default(f.path()), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_theme() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/settings.toml");
        let s = Settings { theme: ThemeName::Light, ..Settings::default() };
        save_settings_to(&path, &s).unwrap();
        assert_eq!(load_settings_from(&path).unwrap().theme, ThemeName::Light);
    }
}

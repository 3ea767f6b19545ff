//! User-facing renderings of internal errors.
//!
//! Error types keep their English `Display` for logs; these helpers produce
//! the short French text shown in the UI.

use crate::app::settings::SettingsError;

/// Headline shown in place of the movie card when the fetch fails.
pub const FETCH_ERROR_HEADLINE: &str = "Erreur lors du chargement du film";

/// Message body for a failed movie fetch. `reason` is the settled
/// `MovieState::Failed` text.
pub fn render_fetch_error(reason: &str) -> String {
    if reason.is_empty() {
        format!("{FETCH_ERROR_HEADLINE}.")
    } else {
        format!("{FETCH_ERROR_HEADLINE} : {reason}")
    }
}

pub fn render_settings_error(err: &SettingsError) -> String {
    match err {
        SettingsError::Io { path, source } => format!(
            "Impossible d'enregistrer les préférences dans {} : {}",
            path.display(),
            source
        ),
        SettingsError::Parse { path, .. } => {
            format!("Fichier de préférences invalide : {}", path.display())
        }
        SettingsError::Serialize(e) => format!("Préférences non sérialisables : {e}"),
    }
}

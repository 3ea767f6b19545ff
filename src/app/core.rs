use std::path::PathBuf;

use crate::app::form::CommentForm;
use crate::app::settings::{self, Settings};
use crate::movie::{FetchError, Movie, MovieState};
use crate::review::{self, Comment, CommentStore};
use crate::ui::themes::ThemeName;

use self::cursor::{ListCursor, ListView};
use super::types::{Focus, Mode};

/// Whole application state for one session.
///
/// The runner owns a single `App` and hands it by `&mut` to key handlers
/// and by `&` to the renderer. `comments` is only mutated through
/// [`App::submit_comment`] and [`App::delete_selected_comment`].
pub struct App {
    pub movie: MovieState,
    pub comments: CommentStore,
    pub form: CommentForm,
    pub cursor: ListCursor,
    pub focus: Focus,
    pub mode: Mode,
    /// Effective settings for this run, command-line overrides included.
    pub settings: Settings,
    /// Settings as read from the file. Only `theme` is ever changed here, so
    /// one-run overrides never reach the disk.
    pub file_settings: Settings,
    /// Where a toggled theme is written back. `None` keeps the preference
    /// in memory only.
    pub settings_path: Option<PathBuf>,
    /// Frame counter driving the loading spinner.
    pub tick: usize,
}

pub mod cursor;
mod navigation;

impl App {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self::with_file_settings(settings.clone(), settings, settings_path)
    }

    /// Like [`App::new`] when `settings` carries overrides that must not be
    /// persisted; `file_settings` is what the settings file held.
    pub fn with_file_settings(
        settings: Settings,
        file_settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        App {
            movie: MovieState::Loading,
            comments: CommentStore::new(),
            form: CommentForm::default(),
            cursor: ListCursor::default(),
            focus: Focus::default(),
            mode: Mode::Normal,
            settings,
            file_settings,
            settings_path,
            tick: 0,
        }
    }

    pub fn theme(&self) -> ThemeName {
        self.settings.theme
    }

    /// Run the form through the validation gate. On success the comment is
    /// appended and the form reset; on failure the per-field messages are
    /// kept on the form and the store is left untouched.
    pub fn submit_comment(&mut self) -> Option<Comment> {
        match review::validate(&self.form.to_raw()) {
            Ok(valid) => {
                let comment = self.comments.append(valid.text, valid.rating);
                tracing::info!(id = comment.id, rating = comment.rating, "comment added");
                self.form.reset();
                Some(comment)
            }
            Err(errors) => {
                tracing::debug!(%errors, "comment rejected");
                self.form.errors = errors;
                None
            }
        }
    }

    /// Id of the comment under the list cursor.
    pub fn selected_comment_id(&self) -> Option<u64> {
        self.comments.get(self.cursor.selected).map(|c| c.id)
    }

    /// Remove the highlighted comment. No-op on an empty list.
    pub fn delete_selected_comment(&mut self) -> bool {
        let Some(id) = self.selected_comment_id() else {
            return false;
        };
        let removed = self.comments.remove(id);
        if removed {
            tracing::info!(id, "comment deleted");
        }
        self.cursor.clamp(self.comments.len());
        removed
    }

    /// Feed the startup fetch outcome into the movie state machine.
    pub fn on_movie_result(&mut self, result: Result<Movie, FetchError>) {
        if !self.movie.settle(result) {
            tracing::warn!("movie result arrived after state settled; ignored");
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Flip between the dark and light palettes, apply it, and persist the
    /// preference. A failed save is reported in a message box and does not
    /// undo the switch.
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.file_settings.theme = self.settings.theme;
        crate::ui::colors::set_theme(self.settings.theme, self.settings.theme_dir.as_deref());
        tracing::info!(theme = %self.settings.theme, "theme toggled");

        let Some(path) = self.settings_path.as_deref() else {
            return;
        };
        if let Err(e) = settings::save_settings_to(path, &self.file_settings) {
            tracing::warn!("failed to persist theme: {e}");
            self.mode = Mode::Message {
                title: "Erreur".to_string(),
                content: crate::errors::render_settings_error(&e),
            };
        }
    }
}

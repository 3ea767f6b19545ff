//! Split handlers: thin wrapper delegating to submodules per focus target.

pub mod comments;
pub mod dialog;
pub mod form;

pub use comments::handle_comments;
pub use dialog::handle_dialog;
pub use form::{handle_accept, handle_comment_input, handle_rating, handle_submit_button};

use crate::app::settings::keybinds;
use crate::app::{App, Focus, ListView, Mode};
use crate::input::{is_ctrl_c, is_printable_key, KeyEvent};

/// Top-level key handler. Returns `Ok(true)` when the app should exit.
///
/// Order matters: Ctrl-C, then the loading screen (quit only), then open
/// dialogs, then typed characters in the comment field, then the global
/// bindings, and finally the handler for the focused widget.
pub fn handle_key(app: &mut App, key: KeyEvent, view: ListView) -> anyhow::Result<bool> {
    if is_ctrl_c(&key) {
        return Ok(true);
    }
    if app.movie.is_loading() {
        return Ok(keybinds::is_quit(&key.code));
    }
    if app.mode != Mode::Normal {
        return handle_dialog(app, key.code);
    }
    if app.focus == Focus::Comment && is_printable_key(&key) {
        return handle_comment_input(app, key.code);
    }

    let code = key.code;
    if keybinds::is_next_field(&code) {
        app.focus_next();
        return Ok(false);
    }
    if keybinds::is_prev_field(&code) {
        app.focus_prev();
        return Ok(false);
    }
    if keybinds::is_submit(&code) {
        app.submit_comment();
        return Ok(false);
    }
    if keybinds::is_toggle_theme(&code) {
        app.toggle_theme();
        return Ok(false);
    }
    if keybinds::is_help(&code) {
        app.mode = Mode::Help;
        return Ok(false);
    }
    if keybinds::is_quit(&code) {
        return Ok(true);
    }

    match app.focus {
        Focus::Comment => handle_comment_input(app, code),
        Focus::Rating => handle_rating(app, code),
        Focus::Accept => handle_accept(app, code),
        Focus::Submit => handle_submit_button(app, code),
        Focus::Comments => handle_comments(app, code, view),
    }
}

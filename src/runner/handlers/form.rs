use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys while the comment textarea has focus. Printable characters are
/// inserted; Enter breaks the line; Esc moves on to the rating.
pub fn handle_comment_input(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_backspace(&code) {
        app.form.pop_grapheme();
    } else if keybinds::is_enter(&code) {
        app.form.push_char('\n');
    } else if keybinds::is_esc(&code) {
        app.focus_next();
    } else if let KeyCode::Char(c) = code {
        app.form.push_char(c);
    }
    Ok(false)
}

/// Keys on the rating select: arrows cycle, digits pick, `0`/Backspace
/// return to the placeholder.
pub fn handle_rating(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_left(&code) || keybinds::is_up(&code) {
        app.form.rating_prev();
    } else if keybinds::is_right(&code) || keybinds::is_down(&code) {
        app.form.rating_next();
    } else if keybinds::is_backspace(&code) || keybinds::is_char(&code, '0') {
        app.form.clear_rating();
    } else if let KeyCode::Char(c) = code {
        if let Some(d) = c.to_digit(10) {
            app.form.set_rating(d as u8);
        }
    }
    Ok(false)
}

pub fn handle_accept(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_toggle(&code) || keybinds::is_enter(&code) {
        app.form.toggle_accept();
    }
    Ok(false)
}

pub fn handle_submit_button(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code) || keybinds::is_toggle(&code) {
        app.submit_comment();
    }
    Ok(false)
}

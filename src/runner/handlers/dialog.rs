use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Help and message boxes close on Enter, Esc or any character.
pub fn handle_dialog(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code)
        || keybinds::is_esc(&code)
        || keybinds::is_help(&code)
        || matches!(code, KeyCode::Char(_))
    {
        app.mode = Mode::Normal;
    }
    Ok(false)
}

use crate::app::settings::keybinds;
use crate::app::{App, ListView};
use crate::input::KeyCode;

/// Keys on the comment list: move, page, delete, back to top.
pub fn handle_comments(app: &mut App, code: KeyCode, view: ListView) -> anyhow::Result<bool> {
    if keybinds::is_down(&code) {
        app.next_comment(view);
    } else if keybinds::is_up(&code) {
        app.previous_comment(view);
    } else if keybinds::is_page_down(&code) {
        app.page_down(view);
    } else if keybinds::is_page_up(&code) {
        app.page_up(view);
    } else if keybinds::is_top(&code) {
        app.back_to_top();
    } else if keybinds::is_delete(&code) {
        app.delete_selected_comment();
        app.ensure_selection_visible(view);
    }
    Ok(false)
}

// Centralised keybind predicates for the application.
//
// Handlers call `is_submit(&code)` and friends instead of matching raw
// `KeyCode` patterns, so user overrides from the settings file apply
// everywhere without touching the handlers.

use crate::input::KeyCode;
use crate::app::settings::runtime_keybinds;

fn is_bound(action: &str, code: &KeyCode) -> bool {
	runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
	is_bound("quit", code)
}

pub fn is_help(code: &KeyCode) -> bool {
	is_bound("help", code)
}

pub fn is_submit(code: &KeyCode) -> bool {
	is_bound("submit", code)
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
	is_bound("toggle_theme", code)
}

pub fn is_next_field(code: &KeyCode) -> bool {
	is_bound("next_field", code)
}

pub fn is_prev_field(code: &KeyCode) -> bool {
	is_bound("prev_field", code)
}

pub fn is_down(code: &KeyCode) -> bool {
	is_bound("down", code)
}

pub fn is_up(code: &KeyCode) -> bool {
	is_bound("up", code)
}

pub fn is_page_down(code: &KeyCode) -> bool {
	is_bound("page_down", code)
}

pub fn is_page_up(code: &KeyCode) -> bool {
	is_bound("page_up", code)
}

pub fn is_left(code: &KeyCode) -> bool {
	is_bound("left", code)
}

pub fn is_right(code: &KeyCode) -> bool {
	is_bound("right", code)
}

pub fn is_enter(code: &KeyCode) -> bool {
	is_bound("enter", code)
}

pub fn is_backspace(code: &KeyCode) -> bool {
	is_bound("backspace", code)
}

pub fn is_esc(code: &KeyCode) -> bool {
	is_bound("esc", code)
}

pub fn is_delete(code: &KeyCode) -> bool {
	is_bound("delete", code)
}

pub fn is_top(code: &KeyCode) -> bool {
	is_bound("top", code)
}

pub fn is_toggle(code: &KeyCode) -> bool {
	is_bound("toggle", code)
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
	matches!(code, &KeyCode::Char(c) if c == want)
}

/// First bound key for `action`, formatted for the help bar.
pub fn label(action: &str) -> String {
	runtime_keybinds::get()
		.keys_for(action)
		.first()
		.map(runtime_keybinds::key_label)
		.unwrap_or_else(|| "?".to_string())
}

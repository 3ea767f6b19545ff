use ratatui::style::{Modifier, Style};
use crate::ui::themes::{Theme, ThemeName};
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;

/// Concrete styles derived from the active [`Theme`]. Widgets read these
/// through [`current`] instead of holding a theme themselves.
#[derive(Clone, Debug)]
pub struct Colors {
	pub base_style: Style,
	pub block_style: Style,
	pub focused_block_style: Style,
	pub title_style: Style,
	pub muted_style: Style,
	pub accent_style: Style,
	pub error_style: Style,
	pub selected_style: Style,
	pub button_style: Style,
	pub danger_style: Style,
	pub footer_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn derive(theme: &Theme) -> Colors {
	let base = Style::default().fg(theme.fg).bg(theme.bg);
	Colors {
		base_style: base,
		block_style: base.fg(theme.muted),
		focused_block_style: base.fg(theme.accent),
		title_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		muted_style: base.fg(theme.muted),
		accent_style: base.fg(theme.accent),
		error_style: base.fg(theme.error),
		selected_style: Style::default().fg(theme.bg).bg(theme.accent),
		button_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		danger_style: Style::default().fg(theme.bg).bg(theme.error),
		footer_style: base.fg(theme.muted),
	}
}

/// Apply the named theme, reading palette overrides from `dir` if given.
pub fn set_theme(name: ThemeName, dir: Option<&Path>) {
	set_from_theme(&Theme::load(name, dir));
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let mut g = CURRENT.lock().unwrap_or_else(|e| e.into_inner());
	*g = derive(theme);
}

pub fn current() -> Colors {
	CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

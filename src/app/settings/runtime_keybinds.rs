// Runtime keybind table.
//
// Bindings start from `Keybinds::default()` and may be overridden per action
// from the `[keybinds]` table of the settings file. The active table lives
// in a process-wide lock so the thin predicates in `keybinds.rs` can consult
// it without threading it through every handler.

use crate::input::KeyCode;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard};

/// Every action name a binding may be attached to.
pub const ACTIONS: &[&str] = &[
    "quit",
    "help",
    "submit",
    "toggle_theme",
    "next_field",
    "prev_field",
    "up",
    "down",
    "page_up",
    "page_down",
    "left",
    "right",
    "enter",
    "backspace",
    "esc",
    "delete",
    "top",
    "toggle",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyCode>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        let defaults: &[(&str, &[KeyCode])] = &[
            ("quit", &[KeyCode::Char('q')]),
            ("help", &[KeyCode::F(1), KeyCode::Char('?')]),
            ("submit", &[KeyCode::F(5)]),
            ("toggle_theme", &[KeyCode::F(2)]),
            ("next_field", &[KeyCode::Tab]),
            ("prev_field", &[KeyCode::BackTab]),
            ("up", &[KeyCode::Up]),
            ("down", &[KeyCode::Down]),
            ("page_up", &[KeyCode::PageUp]),
            ("page_down", &[KeyCode::PageDown]),
            ("left", &[KeyCode::Left]),
            ("right", &[KeyCode::Right]),
            ("enter", &[KeyCode::Enter]),
            ("backspace", &[KeyCode::Backspace]),
            ("esc", &[KeyCode::Esc]),
            ("delete", &[KeyCode::Delete, KeyCode::Char('d')]),
            ("top", &[KeyCode::Home, KeyCode::Char('g')]),
            ("toggle", &[KeyCode::Char(' ')]),
        ];
        let map = defaults
            .iter()
            .map(|(action, keys)| (action.to_string(), keys.to_vec()))
            .collect();
        Keybinds { map }
    }
}

impl Keybinds {
    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map.get(action).is_some_and(|keys| keys.contains(code))
    }

    pub fn keys_for(&self, action: &str) -> &[KeyCode] {
        self.map.get(action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the bindings of each listed action. Unknown actions and key
    /// names that do not parse are skipped with a warning; an action whose
    /// every key failed to parse keeps its previous binding.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, Vec<String>>) -> Self {
        for (action, names) in overrides {
            if !ACTIONS.contains(&action.as_str()) {
                tracing::warn!(action = %action, "ignoring keybind for unknown action");
                continue;
            }
            let keys: Vec<KeyCode> = names
                .iter()
                .filter_map(|n| {
                    let parsed = parse_key(n);
                    if parsed.is_none() {
                        tracing::warn!(action = %action, key = %n, "ignoring unparseable key name");
                    }
                    parsed
                })
                .collect();
            if !keys.is_empty() {
                self.map.insert(action.clone(), keys);
            }
        }
        self
    }
}

/// Parse a key name as written in the settings file.
///
/// Accepts single characters (`"q"`), `"space"`, `"f1"`..`"f12"` and the
/// usual named keys (`"enter"`, `"tab"`, `"backtab"`, `"pagedown"`...).
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" | "shift-tab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        _ => return None,
    };
    Some(code)
}

/// Short label for a key, used by the help bar.
pub fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift-Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{other:?}"),
    }
}

static RUNTIME: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Current keybind table.
pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    RUNTIME.read().unwrap_or_else(|e| e.into_inner())
}

/// Replace the active keybind table.
pub fn install(kb: Keybinds) {
    let mut g = RUNTIME.write().unwrap_or_else(|e| e.into_inner());
    *g = kb;
}

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Persisted theme preference. `Dark` is the "cinéma" look, `Light` the
/// "plein air" one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }

    /// Label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Dark => "cinéma",
            ThemeName::Light => "plein air",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    muted: Option<String>,
    error: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self { bg: Color::Rgb(11, 12, 13), fg: Color::Gray, accent: Color::Yellow, muted: Color::DarkGray, error: Color::LightRed }
    }

    pub fn light() -> Self {
        Self { bg: Color::White, fg: Color::Black, accent: Color::Blue, muted: Color::Gray, error: Color::Red }
    }

    pub fn builtin(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Parse a theme file with a `[palette]` table of `#rrggbb` colours.
    /// Files without a palette fall back to `base`; missing optional keys
    /// keep `base`'s value.
    pub fn from_toml_with_base(s: &str, base: Theme) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        let Some(p) = v.get("palette") else {
            return Ok(base);
        };
        let p: Pal = p.clone().try_into()?;
        Ok(Self {
            bg: parse_hex(&p.bg),
            fg: parse_hex(&p.fg),
            accent: parse_hex(&p.accent),
            muted: p.muted.as_deref().map(parse_hex).unwrap_or(base.muted),
            error: p.error.as_deref().map(parse_hex).unwrap_or(base.error),
        })
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        Self::from_toml_with_base(s, Self::dark())
    }

    /// Load `<dir>/<name>.toml` when a theme directory is configured,
    /// otherwise (or on any read/parse failure) use the built-in palette.
    pub fn load(name: ThemeName, dir: Option<&Path>) -> Self {
        let base = Self::builtin(name);
        let Some(dir) = dir else {
            return base;
        };
        let path = dir.join(format!("{}.toml", name.as_str()));
        match std::fs::read_to_string(&path) {
            Ok(s) => match Self::from_toml_with_base(&s, base.clone()) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "invalid theme file: {e}");
                    base
                }
            },
            Err(e) => {
                tracing::debug!(path = %path.display(), "theme file not read: {e}");
                base
            }
        }
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() != 6 {
        return Color::Reset;
    }
    // `get` yields None on a non-ASCII char boundary instead of panicking
    let channel = |range: std::ops::Range<usize>| s.get(range).and_then(|h| u8::from_str_radix(h, 16).ok());
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

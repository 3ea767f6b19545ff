use std::fmt;

/// Which widget receives keyboard input.
///
/// Tab order follows the screen: the form fields top to bottom, then the
/// comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Comment,
    Rating,
    Accept,
    Submit,
    Comments,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Comment,
        Focus::Rating,
        Focus::Accept,
        Focus::Submit,
        Focus::Comments,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// True while keystrokes are inserted as text.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::Comment)
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Focus::Comment => "commentaire",
            Focus::Rating => "note",
            Focus::Accept => "conditions",
            Focus::Submit => "ajouter",
            Focus::Comments => "commentaires",
        };
        f.write_str(s)
    }
}

/// Modal state layered over the main screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
    Message { title: String, content: String },
}

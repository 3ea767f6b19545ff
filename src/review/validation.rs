//! Validation gate for comment submissions.
//!
//! A submission is checked field by field and the result is all-or-nothing:
//! either every rule passes and a [`ValidComment`] comes back, or the caller
//! gets one human-readable message per failing field. Nothing here touches
//! the store.

use std::collections::BTreeMap;
use std::fmt;

/// Maximum comment length, in characters, after trimming.
pub const MAX_COMMENT_CHARS: usize = 500;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const MSG_COMMENT_REQUIRED: &str = "Le commentaire est obligatoire";
pub const MSG_COMMENT_TOO_LONG: &str = "Le commentaire ne peut pas dépasser 500 caractères";
pub const MSG_NOTE_REQUIRED: &str = "La note est obligatoire";
pub const MSG_NOTE_INVALID: &str = "Veuillez sélectionner une note valide";
pub const MSG_NOTE_TOO_LOW: &str = "La note doit être au moins 1";
pub const MSG_NOTE_TOO_HIGH: &str = "La note ne peut pas dépasser 5";
pub const MSG_ACCEPT_REQUIRED: &str = "Vous devez accepter les conditions générales";

/// Form fields the gate knows about. Ordering drives the iteration order of
/// [`FieldErrors`] so messages render top to bottom like the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Comment,
    Note,
    AcceptConditions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Comment => "comment",
            Field::Note => "note",
            Field::AcceptConditions => "acceptConditions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form input exactly as the widgets hold it.
///
/// `note` carries the selection value as text (`None` when nothing was
/// picked) so non-numeric input can be represented and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub comment: String,
    pub note: Option<String>,
    pub accept_conditions: Option<bool>,
}

/// A submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub text: String,
    pub rating: u8,
}

/// Field name to message mapping produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Check `raw` against every rule. Pure; call it again on each attempt.
pub fn validate(raw: &RawSubmission) -> Result<ValidComment, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(msg) = check_comment(&raw.comment) {
        errors.insert(Field::Comment, msg);
    }
    let rating = match check_note(raw.note.as_deref()) {
        Ok(r) => Some(r),
        Err(msg) => {
            errors.insert(Field::Note, msg);
            None
        }
    };
    if raw.accept_conditions != Some(true) {
        errors.insert(Field::AcceptConditions, MSG_ACCEPT_REQUIRED);
    }

    match rating {
        Some(rating) if errors.is_empty() => Ok(ValidComment {
            text: raw.comment.clone(),
            rating,
        }),
        _ => Err(errors),
    }
}

fn check_comment(text: &str) -> Result<(), &'static str> {
    let len = text.trim().chars().count();
    if len == 0 {
        Err(MSG_COMMENT_REQUIRED)
    } else if len > MAX_COMMENT_CHARS {
        Err(MSG_COMMENT_TOO_LONG)
    } else {
        Ok(())
    }
}

fn check_note(note: Option<&str>) -> Result<u8, &'static str> {
    let raw = note.ok_or(MSG_NOTE_REQUIRED)?;
    let value: f64 = raw.trim().parse().map_err(|_| MSG_NOTE_INVALID)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(MSG_NOTE_INVALID);
    }
    if value < f64::from(MIN_RATING) {
        Err(MSG_NOTE_TOO_LOW)
    } else if value > f64::from(MAX_RATING) {
        Err(MSG_NOTE_TOO_HIGH)
    } else {
        Ok(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(comment: &str, note: Option<&str>, accept: Option<bool>) -> RawSubmission {
        RawSubmission {
            comment: comment.to_string(),
            note: note.map(str::to_string),
            accept_conditions: accept,
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let ok = validate(&raw("Great movie", Some("5"), Some(true))).unwrap();
        assert_eq!(ok.text, "Great movie");
        assert_eq!(ok.rating, 5);
    }

    #[test]
    fn empty_and_blank_comments_are_required() {
        for text in ["", "   ", "\n\t"] {
            let errs = validate(&raw(text, Some("3"), Some(true))).unwrap_err();
            assert_eq!(errs.get(Field::Comment), Some(MSG_COMMENT_REQUIRED));
            assert_eq!(errs.len(), 1);
        }
    }

    #[test]
    fn comment_length_boundary() {
        let at_limit = "a".repeat(500);
        assert!(validate(&raw(&at_limit, Some("1"), Some(true))).is_ok());

        let over = "a".repeat(501);
        let errs = validate(&raw(&over, Some("1"), Some(true))).unwrap_err();
        assert_eq!(errs.get(Field::Comment), Some(MSG_COMMENT_TOO_LONG));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(500);
        assert!(validate(&raw(&accented, Some("4"), Some(true))).is_ok());
    }

    #[test]
    fn note_rules() {
        let cases = [
            (None, MSG_NOTE_REQUIRED),
            (Some(""), MSG_NOTE_INVALID),
            (Some("abc"), MSG_NOTE_INVALID),
            (Some("2.5"), MSG_NOTE_INVALID),
            (Some("0"), MSG_NOTE_TOO_LOW),
            (Some("-3"), MSG_NOTE_TOO_LOW),
            (Some("6"), MSG_NOTE_TOO_HIGH),
        ];
        for (note, expected) in cases {
            let errs = validate(&raw("ok", note, Some(true))).unwrap_err();
            assert_eq!(errs.get(Field::Note), Some(expected), "note {:?}", note);
        }
    }

    #[test]
    fn integral_float_notes_are_coerced() {
        let ok = validate(&raw("ok", Some(" 3.0 "), Some(true))).unwrap();
        assert_eq!(ok.rating, 3);
    }

    #[test]
    fn conditions_must_be_accepted() {
        for accept in [None, Some(false)] {
            let errs = validate(&raw("ok", Some("2"), accept)).unwrap_err();
            assert_eq!(errs.get(Field::AcceptConditions), Some(MSG_ACCEPT_REQUIRED));
        }
    }

    #[test]
    fn reports_every_failing_field_in_form_order() {
        let errs = validate(&raw("", Some("9"), Some(false))).unwrap_err();
        let fields: Vec<Field> = errs.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Comment, Field::Note, Field::AcceptConditions]);
    }

    #[test]
    fn keeps_text_as_submitted() {
        let ok = validate(&raw("  padded  ", Some("4"), Some(true))).unwrap();
        assert_eq!(ok.text, "  padded  ");
    }
}

use unicode_segmentation::UnicodeSegmentation;

use crate::review::validation::{FieldErrors, RawSubmission, MAX_RATING, MIN_RATING};

/// Editable state of the "add a comment" form.
///
/// The form holds raw values only; nothing is checked until submission,
/// when [`CommentForm::to_raw`] is handed to the validation gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub comment: String,
    /// `None` is the "Sélectionnez une note" placeholder.
    pub rating: Option<u8>,
    pub accept: bool,
    /// Messages from the last failed submission.
    pub errors: FieldErrors,
}

impl CommentForm {
    pub fn push_char(&mut self, c: char) {
        self.comment.push(c);
    }

    /// Remove the last grapheme so combined characters go away in one press.
    pub fn pop_grapheme(&mut self) {
        if let Some((idx, _)) = self.comment.grapheme_indices(true).next_back() {
            self.comment.truncate(idx);
        }
    }

    /// Move the selection forward: placeholder, 1, 2, ... 5, placeholder.
    pub fn rating_next(&mut self) {
        self.rating = match self.rating {
            None => Some(MIN_RATING),
            Some(r) if r >= MAX_RATING => None,
            Some(r) => Some(r + 1),
        };
    }

    pub fn rating_prev(&mut self) {
        self.rating = match self.rating {
            None => Some(MAX_RATING),
            Some(r) if r <= MIN_RATING => None,
            Some(r) => Some(r - 1),
        };
    }

    /// Select `r` if it is one of the offered options.
    pub fn set_rating(&mut self, r: u8) {
        if (MIN_RATING..=MAX_RATING).contains(&r) {
            self.rating = Some(r);
        }
    }

    pub fn clear_rating(&mut self) {
        self.rating = None;
    }

    pub fn toggle_accept(&mut self) {
        self.accept = !self.accept;
    }

    pub fn char_count(&self) -> usize {
        self.comment.chars().count()
    }

    pub fn to_raw(&self) -> RawSubmission {
        RawSubmission {
            comment: self.comment.clone(),
            note: self.rating.map(|r| r.to_string()),
            accept_conditions: Some(self.accept),
        }
    }

    /// Back to the pristine state after a successful submission.
    pub fn reset(&mut self) {
        *self = CommentForm::default();
    }
}

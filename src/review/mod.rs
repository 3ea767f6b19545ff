//! Comment review core: the validation gate and the session store.

pub mod store;
pub mod validation;

pub use store::{Comment, CommentStore};
pub use validation::{validate, Field, FieldErrors, RawSubmission, ValidComment};

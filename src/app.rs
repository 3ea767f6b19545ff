pub mod core;
pub mod form;
pub mod settings;
pub mod types;

pub use self::core::App;
pub use self::core::cursor::{ListCursor, ListView};
pub use form::CommentForm;
pub use types::{Focus, Mode};

use chrono::{DateTime, Local};

/// A stored comment. Immutable once appended; only ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Creation timestamp in milliseconds, bumped when needed so ids stay
    /// unique and strictly increasing within a store.
    pub id: u64,
    pub text: String,
    pub rating: u8,
    pub created: DateTime<Local>,
}

impl Comment {
    /// Local date string shown next to the rating.
    pub fn date_label(&self) -> String {
        self.created.format("%d/%m/%Y").to_string()
    }
}

/// Ordered in-memory list of comments for the current session.
///
/// `append` and `remove` are the only mutators. Insertion order is the
/// display order.
#[derive(Debug, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
    last_id: u64,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment stamped with the local clock.
    pub fn append(&mut self, text: impl Into<String>, rating: u8) -> Comment {
        self.append_at(text, rating, Local::now())
    }

    /// Append a comment stamped with `now`. Input is expected to have passed
    /// the validation gate already.
    pub fn append_at(&mut self, text: impl Into<String>, rating: u8, now: DateTime<Local>) -> Comment {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = if millis > self.last_id { millis } else { self.last_id + 1 };
        self.last_id = id;
        let comment = Comment {
            id,
            text: text.into(),
            rating,
            created: now,
        };
        self.comments.push(comment.clone());
        comment
    }

    /// Remove the comment with `id`. Returns `false` (and changes nothing)
    /// when no such comment exists.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        self.comments.len() != before
    }

    pub fn list(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

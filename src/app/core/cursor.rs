/// Scroll offset at or past which the "back to top" hint is shown.
pub const BACK_TO_TOP_THRESHOLD: usize = 3;

/// Inner size of the comment list: wrap width in columns and height in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView {
    pub width: u16,
    pub rows: usize,
}

impl ListView {
    pub fn new(width: u16, rows: usize) -> Self {
        Self { width, rows }
    }
}

/// Selection and scroll position over the comment list.
///
/// Kept separate from the store so rendering state never mutates comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Index of the highlighted comment.
    pub selected: usize,
    /// Index of the top-most visible comment.
    pub offset: usize,
}

impl ListCursor {
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep `selected` inside `0..len` after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.selected = std::cmp::min(self.selected, len.saturating_sub(1));
        self.offset = std::cmp::min(self.offset, self.selected);
    }

    /// Adjust `offset` so the selected comment fits entirely in a viewport
    /// of `rows` terminal rows, where `heights[i]` is the rendered height of
    /// comment `i`.
    pub fn ensure_visible(&mut self, heights: &[usize], rows: usize) {
        if rows == 0 || heights.is_empty() {
            self.offset = 0;
            return;
        }
        self.clamp(heights.len());
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        while self.offset < self.selected
            && heights[self.offset..=self.selected].iter().sum::<usize>() > rows
        {
            self.offset += 1;
        }
    }

    /// Number of comments, starting at `offset`, that fit in `rows`. Never
    /// less than one.
    pub fn visible_count(&self, heights: &[usize], rows: usize) -> usize {
        let mut used = 0;
        let mut count = 0;
        for h in heights.iter().skip(self.offset) {
            if used + h > rows {
                break;
            }
            used += h;
            count += 1;
        }
        count.max(1)
    }

    pub fn back_to_top(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.offset >= BACK_TO_TOP_THRESHOLD
    }
}

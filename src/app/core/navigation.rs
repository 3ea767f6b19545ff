use super::*;
use crate::ui::widgets::comment_list::item_height;

impl App {
    /// Rendered height of every comment, including the delete hint under the
    /// highlighted one while the list has focus.
    pub fn comment_heights(&self, width: u16) -> Vec<usize> {
        let focused = self.focus == Focus::Comments;
        self.comments
            .list()
            .iter()
            .enumerate()
            .map(|(i, c)| item_height(c, width, focused && i == self.cursor.selected))
            .collect()
    }

    /// Ensure the highlighted comment is fully visible in `view`.
    pub fn ensure_selection_visible(&mut self, view: ListView) {
        let heights = self.comment_heights(view.width);
        self.cursor.ensure_visible(&heights, view.rows);
    }

    /// Comments that fit in `view` from the current scroll offset.
    fn page_len(&self, view: ListView) -> usize {
        self.cursor.visible_count(&self.comment_heights(view.width), view.rows)
    }

    /// Move the comment cursor down by one.
    pub fn next_comment(&mut self, view: ListView) {
        self.cursor.select_next(self.comments.len());
        self.ensure_selection_visible(view);
    }

    /// Move the comment cursor up by one.
    pub fn previous_comment(&mut self, view: ListView) {
        self.cursor.select_prev();
        self.ensure_selection_visible(view);
    }

    /// Move down by one screenful with clamping.
    pub fn page_down(&mut self, view: ListView) {
        if !self.comments.is_empty() {
            self.cursor.selected = std::cmp::min(
                self.cursor.selected.saturating_add(self.page_len(view)),
                self.comments.len().saturating_sub(1),
            );
        }
        self.ensure_selection_visible(view);
    }

    /// Move up by one screenful; never underflows.
    pub fn page_up(&mut self, view: ListView) {
        self.cursor.selected = self.cursor.selected.saturating_sub(self.page_len(view));
        self.ensure_selection_visible(view);
    }

    /// Jump back to the first comment.
    pub fn back_to_top(&mut self) {
        self.cursor.back_to_top();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

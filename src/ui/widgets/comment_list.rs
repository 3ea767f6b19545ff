use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::settings::keybinds;
use crate::app::{App, Focus};
use crate::review::Comment;
use crate::ui::colors::{current as theme_current, Colors};

pub const EMPTY_TEXT: &str = "Aucun commentaire pour le moment";
pub const DELETE_LABEL: &str = "Supprimer";

/// Header line of a comment: rating on the left, date after it.
pub fn comment_header(c: &Comment) -> String {
    format!("Note : {}/5   {}", c.rating, c.date_label())
}

/// Comment text wrapped to `width` columns, hard breaks kept.
fn wrapped_text(c: &Comment, width: u16) -> Vec<String> {
    c.text
        .lines()
        .flat_map(|line| textwrap::wrap(line, width.max(1) as usize))
        .map(|w| w.into_owned())
        .collect()
}

/// Rows a comment takes in the list: header, wrapped text, the delete hint
/// when highlighted, and a blank spacer.
pub fn item_height(c: &Comment, width: u16, selected: bool) -> usize {
    1 + wrapped_text(c, width).len() + usize::from(selected) + 1
}

fn comment_item<'a>(c: &'a Comment, width: u16, colors: &Colors, selected: bool) -> ListItem<'a> {
    let mut lines = vec![Line::from(vec![Span::styled(comment_header(c), colors.accent_style)])];
    lines.extend(wrapped_text(c, width).into_iter().map(Line::raw));
    if selected {
        lines.push(Line::from(Span::styled(
            format!(" {DELETE_LABEL} ({}) ", keybinds::label("delete")),
            colors.danger_style,
        )));
    }
    lines.push(Line::raw(""));
    ListItem::new(Text::from(lines))
}

/// Draw the stored comments in insertion order, or the empty-state notice.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = theme_current();
    let focused = app.focus == Focus::Comments;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" Commentaires ({}) ", app.comments.len()), colors.title_style))
        .border_style(if focused { colors.focused_block_style } else { colors.block_style })
        .style(colors.base_style);
    if app.cursor.shows_back_to_top() {
        block = block.title_bottom(
            Line::from(format!(" ↑ haut de page ({}) ", keybinds::label("top"))).alignment(Alignment::Right),
        );
    }

    if app.comments.is_empty() {
        let p = Paragraph::new(EMPTY_TEXT)
            .block(block)
            .alignment(Alignment::Center)
            .style(colors.muted_style)
            .wrap(Wrap { trim: true });
        f.render_widget(p, area);
        return;
    }

    let width = area.width.saturating_sub(2);
    let items: Vec<ListItem> = app
        .comments
        .list()
        .iter()
        .enumerate()
        .map(|(i, c)| comment_item(c, width, &colors, focused && i == app.cursor.selected))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { colors.selected_style } else { colors.base_style });
    let mut state = ListState::default()
        .with_offset(app.cursor.offset)
        .with_selected(Some(app.cursor.selected));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::CommentStore;
    use chrono::{Local, TimeZone};

    #[test]
    fn header_has_rating_and_date() {
        let mut store = CommentStore::new();
        let c = store.append_at("x", 4, Local.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap());
        assert_eq!(comment_header(&c), "Note : 4/5   02/01/2025");
    }

    #[test]
    fn item_height_matches_rendered_item() {
        let mut store = CommentStore::new();
        let c = store.append("une ligne assez longue pour passer à la ligne\net une autre", 3);
        let colors = theme_current();
        for selected in [false, true] {
            let expected = comment_item(&c, 12, &colors, selected).height();
            assert_eq!(item_height(&c, 12, selected), expected);
        }
        assert!(item_height(&c, 12, false) > 3);
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::review::validation::{Field, MAX_COMMENT_CHARS, MAX_RATING};
use crate::ui::colors::{current as theme_current, Colors};
use crate::ui::util::wrapped_height;

pub const COMMENT_LABEL: &str = "Ajouter un commentaire :";
pub const NOTE_LABEL: &str = "Note :";
pub const NOTE_PLACEHOLDER: &str = "Sélectionnez une note";
pub const ACCEPT_LABEL: &str = "J'accepte les conditions générales";
pub const SUBMIT_LABEL: &str = "Ajouter";

/// Text shown in the rating select.
pub fn rating_label(rating: Option<u8>) -> String {
    match rating {
        None => NOTE_PLACEHOLDER.to_string(),
        Some(r) => {
            let filled = r.min(MAX_RATING) as usize;
            format!(
                "{}{} {}/{}",
                "★".repeat(filled),
                "☆".repeat(MAX_RATING as usize - filled),
                r,
                MAX_RATING
            )
        }
    }
}

pub fn checkbox_label(checked: bool) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, ACCEPT_LABEL)
}

fn border_style(colors: &Colors, focused: bool, invalid: bool) -> Style {
    if invalid {
        colors.error_style
    } else if focused {
        colors.focused_block_style
    } else {
        colors.block_style
    }
}

fn error_line<'a>(colors: &Colors, msg: Option<&'a str>) -> Paragraph<'a> {
    Paragraph::new(msg.unwrap_or_default()).style(colors.error_style)
}

/// Draw the comment form: textarea, rating select, terms checkbox and the
/// submit button, each followed by its inline validation message.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = theme_current();
    let form = &app.form;
    let errors = &form.errors;

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Commentaires ", colors.title_style))
        .style(colors.block_style);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // textarea
            Constraint::Length(1),
            Constraint::Length(3), // rating select
            Constraint::Length(1),
            Constraint::Length(1), // checkbox
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Min(0),
        ])
        .split(inner);

    // textarea
    let focused = app.focus == Focus::Comment;
    let mut text = form.comment.clone();
    if focused {
        text.push('▏');
    }
    let text_width = rows[0].width.saturating_sub(2);
    let visible = rows[0].height.saturating_sub(2) as usize;
    let scroll = wrapped_height(&text, text_width).saturating_sub(visible);
    let title = format!(" {COMMENT_LABEL} {}/{MAX_COMMENT_CHARS} ", form.char_count());
    let textarea = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(&colors, focused, errors.get(Field::Comment).is_some())),
        )
        .style(colors.base_style)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(textarea, rows[0]);
    f.render_widget(error_line(&colors, errors.get(Field::Comment)), rows[1]);

    // rating select
    let focused = app.focus == Focus::Rating;
    let arrows = if focused { "◂ ▸" } else { "" };
    let select = Paragraph::new(Line::from(vec![
        Span::styled(rating_label(form.rating), if form.rating.is_some() { colors.accent_style } else { colors.muted_style }),
        Span::raw("  "),
        Span::styled(arrows, colors.muted_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {NOTE_LABEL} "))
            .border_style(border_style(&colors, focused, errors.get(Field::Note).is_some())),
    )
    .style(colors.base_style);
    f.render_widget(select, rows[2]);
    f.render_widget(error_line(&colors, errors.get(Field::Note)), rows[3]);

    // checkbox
    let focused = app.focus == Focus::Accept;
    let style = if errors.get(Field::AcceptConditions).is_some() {
        colors.error_style
    } else if focused {
        colors.accent_style
    } else {
        colors.base_style
    };
    f.render_widget(Paragraph::new(checkbox_label(form.accept)).style(style), rows[4]);
    f.render_widget(error_line(&colors, errors.get(Field::AcceptConditions)), rows[5]);

    // button
    let style = if app.focus == Focus::Submit { colors.button_style } else { colors.accent_style };
    f.render_widget(Paragraph::new(format!("[ {SUBMIT_LABEL} ]")).style(style), rows[6]);
}

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::settings::keybinds::label;
use crate::ui::util::centered_rect;

/// `(action, description)` rows of the help dialog.
const HELP_ROWS: &[(&str, &str)] = &[
    ("next_field", "champ suivant"),
    ("prev_field", "champ précédent"),
    ("submit", "envoyer le commentaire"),
    ("toggle", "cocher / décocher les conditions"),
    ("left", "note précédente"),
    ("right", "note suivante"),
    ("up", "commentaire précédent"),
    ("down", "commentaire suivant"),
    ("delete", "supprimer le commentaire"),
    ("top", "retour en haut de la liste"),
    ("toggle_theme", "basculer cinéma / plein air"),
    ("quit", "quitter (hors saisie)"),
];

pub fn help_lines() -> Vec<String> {
    HELP_ROWS
        .iter()
        .map(|(action, desc)| format!("{:>10}  {desc}", label(action)))
        .collect()
}

pub fn draw_help(f: &mut Frame, area: Rect) {
    let colors = crate::ui::colors::current();
    let rect = centered_rect(60, 70, area);
    let mut lines: Vec<Line> = help_lines().into_iter().map(Line::raw).collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Ctrl-C quitte à tout moment", colors.muted_style)));
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Aide ", colors.title_style))
                .border_style(colors.focused_block_style),
        )
        .style(colors.base_style);
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Modal message box. Error titles are drawn with the error palette.
pub fn draw_message(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = crate::ui::colors::current();
    let rect = centered_rect(60, 30, area);
    let is_error = title.to_lowercase().contains("erreur");
    let border = if is_error { colors.error_style } else { colors.focused_block_style };
    let lines = vec![
        Line::raw(content.to_string()),
        Line::raw(""),
        Line::from(Span::styled("[ OK ]", colors.button_style)).alignment(Alignment::Center),
    ];
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(border),
        )
        .style(colors.base_style)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

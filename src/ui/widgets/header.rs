use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

use crate::app::settings::keybinds;
use crate::app::App;
use crate::ui::colors::current as current_colors;

/// One-line title bar: app name and the active theme with its toggle key.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let theme = format!(
        "Thème : {} ({}) ",
        app.theme().label(),
        keybinds::label("toggle_theme")
    );
    let left = Span::styled(" cineZoom ", colors.title_style);
    let pad = (area.width as usize)
        .saturating_sub(left.width() + theme.chars().count());
    let line = Line::from(vec![
        left,
        Span::raw(" ".repeat(pad)),
        Span::styled(theme, colors.muted_style),
    ]);
    f.render_widget(Paragraph::new(line).style(colors.base_style), area);
}

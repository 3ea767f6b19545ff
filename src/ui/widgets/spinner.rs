use ratatui::{layout::{Alignment, Rect}, widgets::Paragraph, Frame};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Chargement...";

/// Spinner glyph for animation frame `tick`.
pub fn frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Centred spinner shown while the movie is loading.
pub fn render(f: &mut Frame, area: Rect, tick: usize) {
    let colors = crate::ui::colors::current();
    let y = area.y + area.height / 2;
    let row = Rect { y, height: 1.min(area.height), ..area };
    let p = Paragraph::new(format!("{} {}", frame(tick), LOADING_TEXT))
        .alignment(Alignment::Center)
        .style(colors.accent_style);
    f.render_widget(p, row);
}

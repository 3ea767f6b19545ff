use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::errors::{render_fetch_error, FETCH_ERROR_HEADLINE};
use crate::movie::Movie;
use crate::ui::colors::{current as theme_current, Colors};

const MISSING: &str = "—";

pub fn title(movie: &Movie) -> &str {
    movie.title.as_deref().unwrap_or("Sans titre")
}

fn release_line(movie: &Movie) -> String {
    format!("Sortie le {}", movie.release_date.as_deref().unwrap_or(MISSING))
}

fn rating_line(movie: &Movie) -> String {
    format!(
        "Note moyenne : {} ({} votes)",
        movie.vote_average.as_deref().unwrap_or(MISSING),
        movie.vote_count.as_deref().unwrap_or(MISSING)
    )
}

fn poster_line(movie: &Movie) -> Option<String> {
    movie.poster_url.as_ref().map(|url| format!("Affiche : {url}"))
}

/// Styled lines of the card body: release date, overview, average rating
/// and the poster link when there is one.
pub fn card_lines(movie: &Movie, colors: &Colors) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(release_line(movie), colors.muted_style), Line::raw("")];
    lines.extend(
        movie
            .overview
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(|l| Line::raw(l.to_string())),
    );
    lines.push(Line::raw(""));
    lines.push(Line::styled(rating_line(movie), colors.accent_style));
    if let Some(poster) = poster_line(movie) {
        lines.push(Line::styled(poster, colors.muted_style));
    }
    lines
}

/// Draw the movie card into `area`.
pub fn render(f: &mut Frame, area: Rect, movie: &Movie) {
    let colors = theme_current();
    let lines = card_lines(movie, &colors);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", title(movie)), colors.title_style))
        .style(colors.block_style);
    let p = Paragraph::new(lines)
        .block(block)
        .style(colors.base_style)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

/// Static error state shown in place of the card. There is no retry.
pub fn render_error(f: &mut Frame, area: Rect, reason: &str) {
    let colors = theme_current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {FETCH_ERROR_HEADLINE} "), colors.error_style))
        .style(colors.block_style);
    let p = Paragraph::new(render_fetch_error(reason))
        .block(block)
        .style(colors.error_style)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

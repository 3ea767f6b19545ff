use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::movie::MovieState;

pub mod colors;
pub mod dialogs;
pub mod themes;
pub mod util;
pub mod widgets;

pub use themes::{Theme, ThemeName};

/// Screen areas for one frame. Exposed so the runner can size paging and
/// tests can target a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub card: Rect,
    pub form: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> ScreenLayout {
    // header (1), main (min), footer help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // movie card above, comments below
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let comments = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main[1]);

    ScreenLayout {
        header: chunks[0],
        card: main[0],
        form: comments[0],
        list: comments[1],
        footer: chunks[2],
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let colors = colors::current();
    f.render_widget(Block::default().style(colors.base_style), f.area());

    let areas = layout(f.area());
    widgets::header::render(f, areas.header, app);

    // Nothing but the spinner until the fetch settles.
    if app.movie.is_loading() {
        let main = Rect {
            y: areas.card.y,
            height: areas.card.height + areas.form.height,
            ..areas.card
        };
        widgets::spinner::render(f, main, app.tick);
        widgets::footer::render(f, areas.footer, app);
        return;
    }

    match &app.movie {
        MovieState::Ready(movie) => widgets::movie_card::render(f, areas.card, movie),
        MovieState::Failed(reason) => widgets::movie_card::render_error(f, areas.card, reason),
        MovieState::Loading => {}
    }
    widgets::comment_form::render(f, areas.form, app);
    widgets::comment_list::render(f, areas.list, app);
    widgets::footer::render(f, areas.footer, app);

    match &app.mode {
        Mode::Help => dialogs::draw_help(f, f.area()),
        Mode::Message { title, content } => dialogs::draw_message(f, f.area(), title, content),
        Mode::Normal => {}
    }
}

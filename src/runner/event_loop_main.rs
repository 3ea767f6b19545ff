use crate::app::settings::runtime_keybinds::{self, Keybinds};
use crate::app::settings::Settings;
use crate::app::{App, ListView};
use crate::input::{poll, read_event, InputEvent};
use crate::movie::{spawn_fetch, FetchError, Movie, MovieSource};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, install_panic_hook, restore_terminal, Tui};
use crate::ui;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Everything `run_app` needs, assembled by `main` from CLI and settings.
pub struct RunConfig {
    /// Effective settings, command-line overrides applied.
    pub settings: Settings,
    /// Settings as read from disk; the theme toggle saves these.
    pub file_settings: Settings,
    pub settings_path: Option<PathBuf>,
    pub source: Box<dyn MovieSource>,
}

/// Deliver a pending fetch result, if any, to the app. A fetch thread that
/// hung up without sending counts as a failure.
pub fn drain_movie(app: &mut App, rx: &Receiver<Result<Movie, FetchError>>) {
    if !app.movie.is_loading() {
        return;
    }
    match rx.try_recv() {
        Ok(result) => app.on_movie_result(result),
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => app.on_movie_result(Err(FetchError::Aborted)),
    }
}

pub fn run_app(config: RunConfig) -> anyhow::Result<()> {
    let RunConfig { settings, file_settings, settings_path, source } = config;

    ui::colors::set_theme(settings.theme, settings.theme_dir.as_deref());
    runtime_keybinds::install(Keybinds::default().with_overrides(&settings.keybinds));

    let mut app = App::with_file_settings(settings, file_settings, settings_path);
    let (tx, rx) = mpsc::channel();
    // The fetch thread is never joined; it ends on its own once it has sent.
    let _fetch = spawn_fetch(source, tx);

    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &rx);
    // Restore terminal state before reporting any loop error.
    restore_terminal(terminal)?;
    tracing::info!(comments = app.comments.len(), "session ended");
    result
}

/// Inner area of the comment list for a terminal of size `area`.
pub fn list_view(area: ratatui::layout::Rect) -> ListView {
    let list = ui::layout(area).list;
    ListView::new(list.width.saturating_sub(2), list.height.saturating_sub(2) as usize)
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    rx: &Receiver<Result<Movie, FetchError>>,
) -> anyhow::Result<()> {
    loop {
        drain_movie(app, rx);

        // Scroll from the same row heights the list widget will draw, so
        // its offset and the cursor's agree.
        let size = terminal.size()?;
        let view = list_view(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.ensure_selection_visible(view);
        terminal.draw(|f| ui::ui(f, app))?;

        if poll(POLL_INTERVAL)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key, view)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        } else {
            app.on_tick();
        }
    }
    Ok(())
}

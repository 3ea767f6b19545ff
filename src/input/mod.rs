//! Terminal input: a small event type over crossterm so the runner does not
//! match on crossterm events directly.

pub mod keyboard;

pub use keyboard::{is_ctrl_c, is_printable_key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Input events the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Windows reports both press and release; only presses count.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Blocks; call after [`poll`] returned `true`.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}

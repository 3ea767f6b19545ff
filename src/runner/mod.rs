//! Terminal lifecycle and the main event loop.

pub mod event_loop_main;
pub mod handlers;
pub mod terminal;

pub use event_loop_main::{drain_movie, run_app, RunConfig};

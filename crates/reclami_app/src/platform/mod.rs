//! Terminal shell around the core state machine: event loop, effect execution,
//! logging and rendering.
mod app;
mod effects;
mod events;
mod logging;
mod ui;

pub use app::run_app;

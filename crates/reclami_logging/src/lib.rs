#![deny(missing_docs)]
//! Shared logging utilities for the reclami workspace.
//!
//! This crate provides the `reclami_*` logging macros used across the
//! codebase, a level parser for the `RECLAMI_LOG` variable and a minimal test
//! initializer for the global logger.

use std::str::FromStr;

#[doc(hidden)]
pub use log;

pub use log::LevelFilter;

/// Environment variable selecting the log level of the application.
pub const LEVEL_ENV_VAR: &str = "RECLAMI_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! reclami_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! reclami_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! reclami_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! reclami_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! reclami_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// Unknown or missing values fall back to `default`.
pub fn parse_level(raw: Option<&str>, default: LevelFilter) -> LevelFilter {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| LevelFilter::from_str(value).ok())
        .unwrap_or(default)
}

/// Reads [`LEVEL_ENV_VAR`] and parses it with [`parse_level`].
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    let raw = std::env::var(LEVEL_ENV_VAR).ok();
    parse_level(raw.as_deref(), default)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

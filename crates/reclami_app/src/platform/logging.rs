//! Platform logging initialization for the reclami terminal app.
//!
//! The terminal belongs to the UI, so logs go to `./reclami.log` in the
//! current working directory. `RECLAMI_LOG` selects the level.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub const LOG_FILE: &str = "./reclami.log";

/// Initialize a file logger at `log_path`.
///
/// Failing to create the file leaves logging disabled; the UI still runs.
pub fn initialize(log_path: &Path) {
    let level = reclami_logging::level_from_env(LevelFilter::Info);

    match File::create(log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("rustls")
        .build()
}

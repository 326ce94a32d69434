//! Logger setup.
//!
//! Everything logs through the `log` facade; the binary installs
//! `env_logger` once at startup.

use env_logger::Env;

use crate::cli::LogLevel;

/// Install the global logger.
///
/// An explicit `level` wins. Otherwise `RUST_LOG` is honored, defaulting to
/// `info`. Calling this twice is harmless; the second call is ignored.
pub fn init(level: Option<LogLevel>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level.to_level_filter());
    }
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

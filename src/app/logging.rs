//! Logger initialization.

use log::{LevelFilter, SetLoggerError};

/// Initializes the global logger with the given level filter.
///
/// Respects `RUST_LOG` overrides from the environment on top of the
/// configured default level.
pub fn init_logger_with(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .try_init()
}

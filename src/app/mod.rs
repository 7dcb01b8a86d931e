//! Application-level utilities (logging).

mod logging;

pub use logging::init_logger_with;

//! Configuration module.
//!
//! Contains CLI option types and application-wide constants.

mod constants;
mod types;

pub use constants::{
    DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, MEMENTO_RAW_SUFFIX,
    MEMENTO_TIMESTAMP_FORMAT,
};
pub use types::{Config, LogLevel};

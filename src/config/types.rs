//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_API_URL;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line configuration.
///
/// Downloads one captured document from a Memento API, either printing the
/// body to stdout or writing the full request/response WARC record sequence
/// to a file.
#[derive(Parser, Debug, Clone)]
#[command(name = "memento_warc", version, about)]
pub struct Config {
    /// Original URL of the captured document
    pub url: String,

    /// Timestamp of the capture (RFC 3339, any zone offset); omit to let the
    /// archive pick a capture
    #[arg(long)]
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Request the raw archived bytes instead of the link-rewritten page
    #[arg(long)]
    pub raw: bool,

    /// Write request/response WARC records to this file instead of printing
    /// the response body
    #[arg(long)]
    pub warc: Option<PathBuf>,

    /// Memento API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Forward HTTP proxy to route requests through
    #[arg(long)]
    pub proxy: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

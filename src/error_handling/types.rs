//! Error type definitions.
//!
//! This module defines the error taxonomy for Memento retrieval and WARC
//! record construction.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while loading a capture or converting it to WARC records.
#[derive(Error, Debug)]
pub enum MementoError {
    /// The retrieval target was malformed (e.g., an empty original URL).
    ///
    /// Never retried; surfaced to the caller immediately.
    #[error("Invalid retrieval target: {0}")]
    InvalidTarget(String),

    /// The Memento API answered with a non-2xx status on the final hop.
    ///
    /// The status code is attached so callers can decide whether to retry.
    #[error("Memento API returned HTTP status {status}")]
    HttpStatus {
        /// Status code of the final response.
        status: StatusCode,
    },

    /// A captured request carried no URL.
    ///
    /// Indicates a contract violation by the transaction-capture collaborator.
    #[error("Request URL not given")]
    MissingUrl,

    /// A captured request carried no method and no proxy override applied.
    #[error("Request method not given")]
    MissingMethod,

    /// A request body that cannot be replayed as bytes.
    ///
    /// Silently dropping the body would corrupt the archival record, so this
    /// is always fatal.
    #[error("Request body is not replayable as bytes")]
    UnsupportedBodyType,

    /// Transport-level failure reported by the HTTP client.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A URL could not be parsed or joined.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

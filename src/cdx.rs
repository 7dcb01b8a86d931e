//! CDX index entry model.
//!
//! Resolving timestamps against a CDX lookup index is handled elsewhere; this
//! module only models the resolved entry shape that the Memento facade
//! consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resolved capture from a CDX lookup index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdxCapture {
    /// Original URL of the captured document.
    pub url: String,
    /// Instant at which the capture was taken.
    pub timestamp: DateTime<Utc>,
    /// MIME type reported by the index, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// HTTP status code reported by the index, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

//! Application-wide constants.

use std::time::Duration;

/// Default Memento API endpoint (the Internet Archive's Wayback Machine).
pub const DEFAULT_API_URL: &str = "https://web.archive.org/web/";

/// Maximum number of redirect hops to follow when capturing a transaction.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// chrono format string for the 14-digit Memento timestamp segment.
pub const MEMENTO_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Timestamp suffix requesting the raw (unmodified) archived bytes.
pub const MEMENTO_RAW_SUFFIX: &str = "id_";

/// Default per-request timeout for the HTTP sessions.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default HTTP User-Agent header value.
pub const DEFAULT_USER_AGENT: &str =
    concat!("memento_warc/", env!("CARGO_PKG_VERSION"));

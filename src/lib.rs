//! memento_warc library: Memento retrieval and WARC conversion
//!
//! This library downloads historical web captures from a web archive's
//! Memento API and converts the underlying HTTP transaction (every hop of a
//! possible redirect chain) into `request`/`response` WARC records that
//! preserve the transaction as it occurred on the wire, including forward
//! proxy tunneling semantics.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use memento_warc::MementoApi;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MementoApi::new("https://web.archive.org/web/")?;
//! let timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//! let records = api.load_url_warc("https://www.example.com/", Some(timestamp), true)?;
//! for record in &records {
//!     println!("{} {}", record.kind.as_str(), record.target_uri);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod cdx;
pub mod config;
mod error_handling;
mod fetch;
mod memento;
mod warc;

// Re-export public API
pub use app::init_logger_with;
pub use cdx::CdxCapture;
pub use config::{Config, LogLevel};
pub use error_handling::MementoError;
pub use fetch::{
    base_request_headers, capture_transaction, header_value, init_redirect_session, init_session,
    HttpHop, RequestBody, RequestSnapshot, Transaction,
};
pub use memento::{format_memento_timestamp, memento_url, MementoApi, MementoTarget};
pub use warc::{
    request_record, response_record, transaction_records, ProxyContext, RecordBuilder,
    StatusAndHeaders, WarcRecord, WarcRecordBuilder, WarcRecordKind, HTTP_CONTENT_TYPE,
};

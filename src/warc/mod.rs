//! WARC record construction.
//!
//! Converts a captured HTTP transaction into `request`/`response` WARC
//! records with content type `application/http`.

mod builder;
mod proxy;
mod records;

pub use builder::{RecordBuilder, StatusAndHeaders, WarcRecord, WarcRecordBuilder, WarcRecordKind};
pub use proxy::ProxyContext;
pub use records::{
    request_record, response_record, transaction_records, HTTP_CONTENT_TYPE,
};

//! WARC record construction from captured transactions.
//!
//! For each hop of a transaction this module reconstructs a byte-accurate
//! HTTP/1.x status line and header block for both the request and the
//! response side, and hands the framed payload to the record-building
//! collaborator, which recomputes content length and digests.

use reqwest::Version;
use url::Url;

use crate::error_handling::MementoError;
use crate::fetch::{header_value, HttpHop, RequestBody, RequestSnapshot, Transaction};
use crate::warc::builder::{RecordBuilder, StatusAndHeaders, WarcRecord, WarcRecordKind};
use crate::warc::proxy::ProxyContext;

/// Declared content type of both record kinds.
pub const HTTP_CONTENT_TYPE: &str = "application/http";

const REQUEST_PROTOCOL: &str = "HTTP/1.1";

/// The request target as the server (or proxy) saw it: the proxy override
/// when present, otherwise path plus `?query` (no trailing `?` when the query
/// is empty).
fn request_target(url: &Url, proxy: &ProxyContext) -> String {
    if let Some(target) = proxy.target_override.as_ref() {
        return target.clone();
    }

    let mut target = url.path().to_string();
    match url.query() {
        Some(query) if !query.is_empty() => {
            target.push('?');
            target.push_str(query);
        }
        _ => {}
    }
    target
}

/// The URL authority (`host[:port]`, port only when explicit) for a
/// synthesized `Host` header.
fn url_authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

fn response_protocol(version: Version) -> String {
    // Only wire versions 0.9, 1.0 and 1.1 map to a protocol string; anything
    // else gets the literal unknown marker rather than a fabricated 1.1.
    let version = if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_11 {
        "1.1"
    } else {
        "?"
    };
    format!("HTTP/{version}")
}

/// Builds the request-side record for one hop.
///
/// The status line is `{method} {target} HTTP/1.1`, with method and target
/// taken from the proxy context when present. Request headers are copied
/// verbatim; a `Host` header is synthesized from the URL authority when
/// absent (case-insensitive check). The body is framed as raw bytes, with
/// text encoded as UTF-8.
///
/// # Errors
///
/// [`MementoError::MissingUrl`] if the request has no URL,
/// [`MementoError::MissingMethod`] if it has no method and no proxy override
/// applies, and [`MementoError::UnsupportedBodyType`] for a body that cannot
/// be replayed as bytes.
pub fn request_record<B: RecordBuilder + ?Sized>(
    request: &RequestSnapshot,
    proxy: &ProxyContext,
    record_builder: &B,
) -> Result<WarcRecord, MementoError> {
    let url = request.url.as_ref().ok_or(MementoError::MissingUrl)?;

    let method = match (proxy.method_override.as_ref(), request.method.as_ref()) {
        (Some(method), _) => method.clone(),
        (None, Some(method)) => method.to_string(),
        (None, None) => return Err(MementoError::MissingMethod),
    };
    let target = request_target(url, proxy);
    let status_line = format!("{method} {target} {REQUEST_PROTOCOL}");

    let mut headers = request.headers.clone();
    if header_value(&headers, "Host").is_none() {
        headers.push(("Host".to_string(), url_authority(url)));
    }

    let payload = match &request.body {
        RequestBody::Empty => Vec::new(),
        RequestBody::Bytes(bytes) => bytes.clone(),
        RequestBody::Text(text) => text.as_bytes().to_vec(),
        RequestBody::Streaming => return Err(MementoError::UnsupportedBodyType),
    };

    Ok(record_builder.create_record(
        WarcRecordKind::Request,
        HTTP_CONTENT_TYPE,
        url.as_str(),
        StatusAndHeaders {
            status_line,
            headers,
            protocol: REQUEST_PROTOCOL.to_string(),
        },
        payload,
    ))
}

/// Builds the response-side record for one hop.
///
/// The status line is `{protocol} {status} {reason}` with the protocol mapped
/// from the wire HTTP version. Response headers are copied verbatim, no
/// synthesis; the payload is the hop's fully-read body bytes. Length and
/// digest hints in the forwarded headers are ignored by the record builder.
///
/// # Errors
///
/// [`MementoError::MissingUrl`] if the hop's request has no URL.
pub fn response_record<B: RecordBuilder + ?Sized>(
    hop: &HttpHop,
    record_builder: &B,
) -> Result<WarcRecord, MementoError> {
    let url = hop.request.url.as_ref().ok_or(MementoError::MissingUrl)?;

    let protocol = response_protocol(hop.version);
    let status_line = format!("{protocol} {} {}", hop.status.as_u16(), hop.reason);

    Ok(record_builder.create_record(
        WarcRecordKind::Response,
        HTTP_CONTENT_TYPE,
        url.as_str(),
        StatusAndHeaders {
            status_line,
            headers: hop.headers.clone(),
            protocol,
        },
        hop.body.clone(),
    ))
}

/// Builds the interleaved record sequence for a whole transaction.
///
/// Every hop yields exactly one `request` record followed by one `response`
/// record, oldest hop first, so a transaction with N hops produces exactly 2N
/// records. A failure on any hop aborts the whole sequence: a truncated
/// record list would break the strict request/response pairing downstream
/// consumers rely on.
pub fn transaction_records<B: RecordBuilder + ?Sized>(
    transaction: &Transaction,
    record_builder: &B,
) -> Result<Vec<WarcRecord>, MementoError> {
    let mut records = Vec::with_capacity(transaction.hops.len() * 2);
    for hop in &transaction.hops {
        let proxy = ProxyContext::infer(hop);
        records.push(request_record(&hop.request, &proxy, record_builder)?);
        records.push(response_record(hop, record_builder)?);
    }
    Ok(records)
}

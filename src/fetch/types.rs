//! Wire-level transaction model.
//!
//! These types hold one completed HTTP transaction (every hop of a possible
//! redirect chain) as it was observed on the wire. They are the input to
//! WARC record construction and are read-only once captured.

use reqwest::{Method, StatusCode, Version};
use url::Url;

/// Body of a captured HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body was sent.
    Empty,
    /// Body sent as raw bytes.
    Bytes(Vec<u8>),
    /// Body sent as text; encoded as UTF-8 on the wire.
    Text(String),
    /// Body streamed from a reader and not replayable after the fact.
    ///
    /// Building a request record from such a body fails rather than silently
    /// dropping it.
    Streaming,
}

/// Snapshot of one originating HTTP request as sent on the wire.
///
/// `method` and `url` are optional because snapshots may come from capture
/// sources outside this crate; record construction treats their absence as a
/// contract violation.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    /// Request method.
    pub method: Option<Method>,
    /// Absolute request URL.
    pub url: Option<Url>,
    /// Request headers in send order, original casing preserved.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: RequestBody,
}

/// One request/response pair of a redirect chain, as observed on the wire.
#[derive(Debug, Clone)]
pub struct HttpHop {
    /// The request that produced this response.
    pub request: RequestSnapshot,
    /// HTTP version reported by the transport.
    pub version: Version,
    /// Response status code.
    pub status: StatusCode,
    /// Response reason phrase.
    pub reason: String,
    /// Response headers in wire order.
    pub headers: Vec<(String, String)>,
    /// Fully-read response body bytes, after any transport-level decoding the
    /// HTTP client already performed.
    pub body: Vec<u8>,
    /// Whether the connection for this hop went through a forward proxy.
    pub via_proxy: bool,
}

/// A completed HTTP transaction: every hop of the redirect chain, oldest
/// first, ending in the final (non-redirect) response.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// The hops, in chronological order.
    pub hops: Vec<HttpHop>,
}

impl Transaction {
    /// Returns the final hop of the transaction, if any hop was captured.
    pub fn final_hop(&self) -> Option<&HttpHop> {
        self.hops.last()
    }

    /// Consumes the transaction and returns its final hop.
    pub fn into_final_hop(self) -> Option<HttpHop> {
        self.hops.into_iter().next_back()
    }
}

/// Looks up a header value by case-insensitive name.
///
/// Returns the first match in wire order.
pub fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

//! WARC record model and the record-building collaborator.
//!
//! The builder owns everything that must be derived from the actual payload
//! bytes: content length, digests, record id, and date. Length or digest
//! hints carried in transport headers are never trusted, because upstream
//! transfer encoding or compression may not match the serialized payload.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Kind of a WARC record produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarcRecordKind {
    /// A `request` record wrapping one HTTP request message.
    Request,
    /// A `response` record wrapping one HTTP response message.
    Response,
}

impl WarcRecordKind {
    /// The record type token as it appears in the `WARC-Type` header.
    pub fn as_str(self) -> &'static str {
        match self {
            WarcRecordKind::Request => "request",
            WarcRecordKind::Response => "response",
        }
    }
}

/// An HTTP status line plus header block, with the protocol it was framed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAndHeaders {
    /// The full status line, e.g. `GET / HTTP/1.1` or `HTTP/1.1 200 OK`.
    pub status_line: String,
    /// Header pairs in wire order, original casing preserved.
    pub headers: Vec<(String, String)>,
    /// Protocol string the message was framed in, e.g. `HTTP/1.1`.
    pub protocol: String,
}

impl StatusAndHeaders {
    /// Serializes the status line and headers as a CRLF-delimited block,
    /// including the terminating blank line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut block = String::with_capacity(self.status_line.len() + 2);
        block.push_str(&self.status_line);
        block.push_str("\r\n");
        for (name, value) in &self.headers {
            block.push_str(name);
            block.push_str(": ");
            block.push_str(value);
            block.push_str("\r\n");
        }
        block.push_str("\r\n");
        block.into_bytes()
    }
}

/// One immutable archival record.
#[derive(Debug, Clone)]
pub struct WarcRecord {
    /// Record kind (`request` or `response`).
    pub kind: WarcRecordKind,
    /// Declared content type of the record block (`application/http` here).
    pub content_type: String,
    /// The URI the wrapped HTTP message was addressed to.
    pub target_uri: String,
    /// `WARC-Record-ID` value, a bracketed `urn:uuid:` URI.
    pub record_id: String,
    /// Instant the record was built.
    pub date: DateTime<Utc>,
    /// Status line and header block of the wrapped HTTP message.
    pub http_headers: StatusAndHeaders,
    /// Payload bytes of the wrapped HTTP message.
    pub payload: Vec<u8>,
    /// Length of the record block (HTTP header block plus payload), in bytes.
    pub content_length: u64,
    /// `sha1:`-labelled digest of the payload bytes.
    pub payload_digest: String,
    /// `sha1:`-labelled digest of the whole record block.
    pub block_digest: String,
}

impl WarcRecord {
    /// Serializes the record block: the HTTP status/header block followed by
    /// the payload.
    pub fn block(&self) -> Vec<u8> {
        let mut block = self.http_headers.to_bytes();
        block.extend_from_slice(&self.payload);
        block
    }

    /// Writes the record in WARC/1.1 on-disk framing.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let block = self.block();
        write!(writer, "WARC/1.1\r\n")?;
        write!(writer, "WARC-Type: {}\r\n", self.kind.as_str())?;
        write!(writer, "WARC-Record-ID: {}\r\n", self.record_id)?;
        write!(
            writer,
            "WARC-Date: {}\r\n",
            self.date.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        write!(writer, "WARC-Target-URI: {}\r\n", self.target_uri)?;
        write!(
            writer,
            "Content-Type: {};msgtype={}\r\n",
            self.content_type,
            self.kind.as_str()
        )?;
        write!(writer, "WARC-Payload-Digest: {}\r\n", self.payload_digest)?;
        write!(writer, "WARC-Block-Digest: {}\r\n", self.block_digest)?;
        write!(writer, "Content-Length: {}\r\n", block.len())?;
        write!(writer, "\r\n")?;
        writer.write_all(&block)?;
        write!(writer, "\r\n\r\n")
    }
}

fn sha1_labelled(bytes: &[u8]) -> String {
    let digest = Sha1::digest(bytes);
    format!("sha1:{}", BASE64.encode(digest))
}

/// Record-building collaborator interface.
///
/// Implementations compute content length and digests from the payload they
/// are handed, independently of any metadata the transport reported.
pub trait RecordBuilder {
    /// Builds one archival record from a framed HTTP message.
    fn create_record(
        &self,
        kind: WarcRecordKind,
        content_type: &str,
        uri: &str,
        http_headers: StatusAndHeaders,
        payload: Vec<u8>,
    ) -> WarcRecord;
}

/// Default record builder: recomputes length and `sha1:` digests and stamps
/// each record with a fresh `urn:uuid:` id and the current date.
#[derive(Debug, Clone, Default)]
pub struct WarcRecordBuilder;

impl WarcRecordBuilder {
    /// Creates a new default record builder.
    pub fn new() -> Self {
        WarcRecordBuilder
    }
}

impl RecordBuilder for WarcRecordBuilder {
    fn create_record(
        &self,
        kind: WarcRecordKind,
        content_type: &str,
        uri: &str,
        http_headers: StatusAndHeaders,
        payload: Vec<u8>,
    ) -> WarcRecord {
        let header_block = http_headers.to_bytes();
        let content_length = (header_block.len() + payload.len()) as u64;
        let mut block_hasher = Sha1::new();
        block_hasher.update(&header_block);
        block_hasher.update(&payload);
        let block_digest = format!("sha1:{}", BASE64.encode(block_hasher.finalize()));

        WarcRecord {
            kind,
            content_type: content_type.to_string(),
            target_uri: uri.to_string(),
            record_id: format!("<urn:uuid:{}>", Uuid::new_v4()),
            date: Utc::now(),
            payload_digest: sha1_labelled(&payload),
            block_digest,
            content_length,
            http_headers,
            payload,
        }
    }
}

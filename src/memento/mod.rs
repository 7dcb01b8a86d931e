//! Memento API facade.
//!
//! [`MementoApi`] loads captured documents from a web archive's Memento
//! endpoint, either as a plain HTTP response or as the full request/response
//! WARC record sequence of the underlying transaction.

mod addressing;

pub use addressing::{format_memento_timestamp, memento_url};

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use reqwest::blocking::{Client, Response};
use url::Url;

use crate::cdx::CdxCapture;
use crate::config::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error_handling::MementoError;
use crate::fetch::{
    base_request_headers, capture_transaction, init_redirect_session, init_session, Transaction,
};
use crate::warc::{transaction_records, RecordBuilder, WarcRecord, WarcRecordBuilder};

/// A retrieval target: either a direct URL with an optional timestamp, or a
/// previously resolved CDX capture.
#[derive(Debug, Clone)]
pub enum MementoTarget {
    /// Original URL plus an optional capture timestamp.
    Url {
        /// Original URL of the document.
        url: String,
        /// Capture timestamp; `None` lets the archive resolve any capture.
        timestamp: Option<DateTime<Utc>>,
    },
    /// A capture resolved through a CDX lookup index.
    Capture(CdxCapture),
}

/// Client for a web archive's Memento API.
///
/// All collaborators are constructor-injected with caller-controlled
/// lifetime: the following session (plain retrieval), the redirect-disabled
/// session (transaction capture), and the record builder. Retry, backoff and
/// rate limiting are the sessions' concern, not this client's.
#[derive(Debug, Clone)]
pub struct MementoApi<B = WarcRecordBuilder> {
    api_url: Url,
    session: Client,
    redirect_session: Client,
    record_builder: B,
    user_agent: String,
    proxied: bool,
}

impl MementoApi<WarcRecordBuilder> {
    /// Creates a client with default sessions and record builder.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` does not parse or the HTTP sessions
    /// cannot be constructed.
    pub fn new(api_url: &str) -> Result<Self, MementoError> {
        let session = init_session(DEFAULT_TIMEOUT, None)?;
        let redirect_session = init_redirect_session(DEFAULT_TIMEOUT, None)?;
        Self::with_collaborators(api_url, session, redirect_session, WarcRecordBuilder::new())
    }
}

impl<B: RecordBuilder> MementoApi<B> {
    /// Creates a client from explicitly injected collaborators.
    ///
    /// `session` should follow redirects (used for plain retrieval);
    /// `redirect_session` must not (used for transaction capture, which
    /// follows the chain manually).
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` does not parse.
    pub fn with_collaborators(
        api_url: &str,
        session: Client,
        redirect_session: Client,
        record_builder: B,
    ) -> Result<Self, MementoError> {
        Ok(MementoApi {
            api_url: Url::parse(api_url)?,
            session,
            redirect_session,
            record_builder,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxied: false,
        })
    }

    /// Marks the injected sessions as routed through a forward proxy.
    ///
    /// This is the connection-level metadata that proxy inference consumes
    /// when reconstructing request lines.
    pub fn proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    /// Overrides the User-Agent header sent with captured requests.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    fn load(&self, target: &MementoTarget, raw: bool) -> Result<Response, MementoError> {
        let url = memento_url(&self.api_url, target, raw)?;
        debug!("Loading memento {url}");
        let response = self.session.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MementoError::HttpStatus { status });
        }
        Ok(response)
    }

    fn load_warc(&self, target: &MementoTarget, raw: bool) -> Result<Vec<WarcRecord>, MementoError> {
        let url = memento_url(&self.api_url, target, raw)?;
        debug!("Capturing memento transaction for {url}");
        let transaction: Transaction = capture_transaction(
            &self.redirect_session,
            &url,
            &base_request_headers(&self.user_agent),
            self.proxied,
        )?;
        let status = match transaction.final_hop() {
            Some(hop) => hop.status,
            None => {
                return Err(MementoError::InvalidTarget(
                    "transaction captured no hops".to_string(),
                ))
            }
        };
        if !status.is_success() {
            return Err(MementoError::HttpStatus { status });
        }
        transaction_records(&transaction, &self.record_builder)
    }

    /// Loads a captured document and returns the raw HTTP response.
    ///
    /// `raw` selects the unmodified archived bytes over the link-rewritten
    /// variant. The timestamp may carry any zone offset; it is normalized to
    /// UTC for addressing.
    ///
    /// # Errors
    ///
    /// [`MementoError::HttpStatus`] for a non-2xx answer, plus addressing and
    /// transport errors.
    pub fn load_url<Tz: TimeZone>(
        &self,
        url: &str,
        timestamp: Option<DateTime<Tz>>,
        raw: bool,
    ) -> Result<Response, MementoError> {
        self.load(
            &MementoTarget::Url {
                url: url.to_string(),
                timestamp: timestamp.map(|t| t.with_timezone(&Utc)),
            },
            raw,
        )
    }

    /// Loads a document for a resolved CDX capture and returns the raw HTTP
    /// response.
    ///
    /// # Errors
    ///
    /// Same as [`MementoApi::load_url`].
    pub fn load_capture(&self, capture: &CdxCapture, raw: bool) -> Result<Response, MementoError> {
        self.load(&MementoTarget::Capture(capture.clone()), raw)
    }

    /// Loads a captured document and converts the whole HTTP transaction
    /// (every redirect hop) into WARC records.
    ///
    /// Records come back in chronological hop order, one `request` record
    /// followed by one `response` record per hop.
    ///
    /// # Errors
    ///
    /// [`MementoError::HttpStatus`] for a non-2xx final hop, plus addressing,
    /// transport and record-construction errors.
    pub fn load_url_warc<Tz: TimeZone>(
        &self,
        url: &str,
        timestamp: Option<DateTime<Tz>>,
        raw: bool,
    ) -> Result<Vec<WarcRecord>, MementoError> {
        self.load_warc(
            &MementoTarget::Url {
                url: url.to_string(),
                timestamp: timestamp.map(|t| t.with_timezone(&Utc)),
            },
            raw,
        )
    }

    /// Loads a document for a resolved CDX capture and converts the whole
    /// HTTP transaction into WARC records.
    ///
    /// # Errors
    ///
    /// Same as [`MementoApi::load_url_warc`].
    pub fn load_capture_warc(
        &self,
        capture: &CdxCapture,
        raw: bool,
    ) -> Result<Vec<WarcRecord>, MementoError> {
        self.load_warc(&MementoTarget::Capture(capture.clone()), raw)
    }
}

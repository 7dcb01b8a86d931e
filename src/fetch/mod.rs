//! HTTP transaction capture.
//!
//! This module performs the actual retrieval and records the full redirect
//! chain. Redirects are followed manually with a redirect-disabled client so
//! that every hop retains its own originating request, the required input for
//! WARC record construction.

mod types;

pub use types::{header_value, HttpHop, RequestBody, RequestSnapshot, Transaction};

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::Method;
use url::Url;

use crate::config::{DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS};
use crate::error_handling::MementoError;

/// Builds the HTTP session used for plain (non-WARC) retrieval.
///
/// Follows redirects automatically. An optional forward proxy URL routes all
/// requests through that proxy.
///
/// # Errors
///
/// Returns an error if the client or the proxy URL cannot be constructed.
pub fn init_session(timeout: Duration, proxy: Option<&str>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT);
    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    builder.build()
}

/// Builds the HTTP session used for transaction capture.
///
/// Redirects are disabled so the capture loop sees every hop of the chain.
///
/// # Errors
///
/// Returns an error if the client or the proxy URL cannot be constructed.
pub fn init_redirect_session(
    timeout: Duration,
    proxy: Option<&str>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(timeout).redirect(Policy::none());
    if let Some(proxy_url) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    builder.build()
}

/// Headers sent with every captured request, in send order.
///
/// Applied explicitly (rather than via client defaults) so the per-hop
/// request snapshot matches what went out on the wire.
pub fn base_request_headers(user_agent: &str) -> Vec<(String, String)> {
    vec![("User-Agent".to_string(), user_agent.to_string())]
}

/// Performs a GET against `start_url` and captures the whole transaction.
///
/// Follows the redirect chain manually, up to [`MAX_REDIRECT_HOPS`] hops,
/// recording for each hop the originating request snapshot and the observed
/// response (version, status, reason, headers in wire order, fully-read body
/// bytes). A redirect status without a `Location` header ends the chain.
///
/// The returned hops are in chronological order, oldest first. Status
/// checking is left to the caller: a non-2xx final hop is captured, not
/// raised here.
///
/// # Errors
///
/// Returns a transport error if any hop's request fails, or a URL error if a
/// `Location` header cannot be resolved against the current URL.
pub fn capture_transaction(
    client: &Client,
    start_url: &Url,
    request_headers: &[(String, String)],
    via_proxy: bool,
) -> Result<Transaction, MementoError> {
    let mut hops: Vec<HttpHop> = Vec::new();
    let mut current = start_url.clone();

    for hop_index in 0..MAX_REDIRECT_HOPS {
        let mut request = client.get(current.clone());
        for (name, value) in request_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send()?;

        let version = response.version();
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();
        debug!(
            "Hop {}: {} {} ({} body bytes)",
            hop_index,
            status.as_u16(),
            current,
            body.len()
        );

        let location = if status.is_redirection() {
            header_value(&headers, "Location").map(str::to_string)
        } else {
            None
        };

        hops.push(HttpHop {
            request: RequestSnapshot {
                method: Some(Method::GET),
                url: Some(current.clone()),
                headers: request_headers.to_vec(),
                body: RequestBody::Empty,
            },
            version,
            status,
            reason,
            headers,
            body,
            via_proxy,
        });

        if status.is_redirection() {
            match location {
                Some(location) => {
                    // Location may be relative; resolve it against the hop URL.
                    current = current.join(&location)?;
                }
                None => {
                    warn!(
                        "Redirect status {} for {} but no Location header",
                        status.as_u16(),
                        current
                    );
                    break;
                }
            }
        } else {
            break;
        }
    }

    Ok(Transaction { hops })
}

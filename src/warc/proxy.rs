//! Forward-proxy request semantics.

use crate::fetch::HttpHop;

/// Proxy-specific request line overrides for one hop.
///
/// Empty (both overrides `None`) when the hop did not go through a forward
/// proxy. A proxied request is addressed by the absolute URL rather than a
/// path; over `https` the proxy additionally sees a `CONNECT` tunnel request,
/// so the method is overridden as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyContext {
    /// Request method override (`CONNECT` for a TLS tunnel).
    pub method_override: Option<String>,
    /// Request target override (the full absolute URL).
    pub target_override: Option<String>,
}

impl ProxyContext {
    /// Derives the proxy context for a hop.
    ///
    /// Pure metadata inspection: proxy use is recognized only when the hop's
    /// connection metadata says a forward proxy was used and the request URL
    /// is known. Missing metadata yields the empty context, never an error.
    pub fn infer(hop: &HttpHop) -> Self {
        if !hop.via_proxy {
            return ProxyContext::default();
        }
        let Some(url) = hop.request.url.as_ref() else {
            return ProxyContext::default();
        };

        let method_override = if url.scheme() == "https" {
            Some("CONNECT".to_string())
        } else {
            None
        };
        ProxyContext {
            method_override,
            target_override: Some(url.to_string()),
        }
    }
}

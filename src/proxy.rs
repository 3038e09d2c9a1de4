//! Fetch-compatibility shim.
//!
//! [`Client::fetch`] takes the usual `(input, init)` pair, normalizes it into
//! one canonical request, and performs it server-side through the kernel's
//! forward proxy. Bodies travel as base64 in both directions; headers travel
//! as a list of single-key records because the proxy has no multi-valued
//! header map.
//!
//! Failures of the proxy call itself come back as [`ClientError::Kernel`],
//! not as transport errors. A proxied 4xx/5xx is *not* an error: it is
//! reported in [`ProxyResponse::status`], as a native fetch would.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::network::{ForwardProxyPayload, ProxyEncoding, ProxyHeaders};
use crate::client::Client;
use crate::config::REQUEST_TIMEOUT;
use crate::engine::fetch::HeadersInit;
use crate::error::ClientError;

// =============================================================================
// HEADER CONVERSION
// =============================================================================

/// Flatten headers into a record. Repeated names are joined with `", "`.
#[must_use]
pub fn headers_to_record(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut record = BTreeMap::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        record.insert(name.to_string(), joined);
    }
    record
}

/// One single-key record per header value, in header order.
#[must_use]
pub fn headers_to_records(headers: &HeaderMap) -> Vec<BTreeMap<String, String>> {
    headers
        .iter()
        .map(|(name, value)| {
            BTreeMap::from([(name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())])
        })
        .collect()
}

/// Expand a proxy header map into `(name, value)` entries.
#[must_use]
pub fn headers_to_entries(headers: &ProxyHeaders) -> Vec<(String, String)> {
    match headers {
        ProxyHeaders::Map(map) => map
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.clone(), v.clone())))
            .collect(),
        ProxyHeaders::Records(records) => records
            .iter()
            .flat_map(|record| record.iter().map(|(k, v)| (k.clone(), v.clone())))
            .collect(),
    }
}

/// Collapse entries into a record; the last value for a name wins.
pub fn entries_to_record<I, K, V>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

// =============================================================================
// REQUEST
// =============================================================================

/// Canonical request: absolute URL, method, headers and body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRequest {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// First argument of [`Client::fetch`].
#[derive(Debug, Clone)]
pub enum RequestInput {
    Url(String),
    Request(ProxyRequest),
}

impl From<&str> for RequestInput {
    fn from(url: &str) -> Self {
        Self::Url(url.to_owned())
    }
}

impl From<String> for RequestInput {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Url> for RequestInput {
    fn from(url: Url) -> Self {
        Self::Url(url.into())
    }
}

impl From<ProxyRequest> for RequestInput {
    fn from(request: ProxyRequest) -> Self {
        Self::Request(request)
    }
}

/// Second argument of [`Client::fetch`]; every field overrides the input.
#[derive(Debug, Clone, Default)]
pub struct RequestInit {
    pub method: Option<Method>,
    pub headers: Option<HeadersInit>,
    pub body: Option<Bytes>,
}

impl ProxyRequest {
    /// Build the canonical request. Relative URLs resolve against `base_url`;
    /// the method defaults to GET.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for unresolvable URLs and
    /// [`ClientError::InvalidHeader`] for invalid init headers.
    pub fn resolve(input: RequestInput, init: RequestInit, base_url: &str) -> Result<Self, ClientError> {
        let mut request = match input {
            RequestInput::Request(request) => request,
            RequestInput::Url(raw) => {
                let url = match Url::parse(&raw) {
                    Ok(url) => url,
                    Err(_) => Url::parse(base_url)
                        .and_then(|base| base.join(&raw))
                        .map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?,
                };
                Self { url, method: Method::GET, headers: HeaderMap::new(), body: Bytes::new() }
            }
        };
        if let Some(method) = init.method {
            request.method = method;
        }
        if let Some(headers) = init.headers {
            request.headers = headers.to_header_map()?;
        }
        if let Some(body) = init.body {
            request.body = body;
        }
        Ok(request)
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Response rebuilt from the proxy's answer.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    /// The proxy envelope's `msg`.
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ProxyResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Json`] when the body does not decode as `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl Client {
    /// Perform a fetch-style request through `/api/network/forwardProxy`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Kernel`] when the proxy call fails
    /// - [`ClientError::Base64`] when the proxied body is not base64
    /// - [`ClientError::InvalidUrl`] / [`ClientError::InvalidHeader`] for bad
    ///   input
    pub async fn fetch(
        &self,
        input: impl Into<RequestInput>,
        init: Option<RequestInit>,
    ) -> Result<ProxyResponse, ClientError> {
        let request = ProxyRequest::resolve(input.into(), init.unwrap_or_default(), self.base_url())?;
        tracing::debug!(url = %request.url, method = %request.method, "forwarding request through kernel proxy");

        let payload = ForwardProxyPayload {
            url: request.url.to_string(),
            method: Some(request.method.to_string()),
            headers: Some(headers_to_records(&request.headers)),
            payload: Some(Value::String(STANDARD.encode(&request.body))),
            timeout: Some(u64::try_from(REQUEST_TIMEOUT.as_millis()).unwrap_or(u64::MAX)),
            content_type: Some("application/json".to_owned()),
            payload_encoding: Some(ProxyEncoding::Base64),
            response_encoding: Some(ProxyEncoding::Base64),
        };
        let envelope = self.forward_proxy(&payload, None).await?;

        let status = StatusCode::from_u16(envelope.data.status)
            .map_err(|e| ClientError::UnexpectedResponse(format!("proxied status: {e}")))?;
        let mut headers = HeaderMap::new();
        for (name, value) in headers_to_entries(&envelope.data.headers) {
            headers.append(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(&value)?);
        }
        let body = Bytes::from(STANDARD.decode(envelope.data.body.as_bytes())?);

        Ok(ProxyResponse { status, status_text: envelope.msg, headers, body })
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

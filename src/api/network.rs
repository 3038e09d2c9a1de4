use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::network;
use crate::client::{Client, RequestDescriptor};
use crate::engine::fetch::HeadersInit;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::{FetchOptions, TempOptions, XhrOptions};
use crate::proxy::entries_to_record;

/// Request mirrored back by `echo`. Each field is mapped into the dialect of
/// whichever engine carries the call.
#[derive(Debug, Clone, Default)]
pub struct EchoPayload {
    /// Overrides the endpoint's POST.
    pub method: Option<Method>,
    pub headers: Option<Vec<(String, String)>>,
    pub query: Option<Vec<(String, String)>>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxyEncoding {
    Text,
    Base64,
    Base64Std,
    Base64Url,
    Base32,
    Base32Std,
    Base32Hex,
    Hex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardProxyPayload {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<BTreeMap<String, String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_encoding: Option<ProxyEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_encoding: Option<ProxyEncoding>,
}

/// Proxied response headers: the kernel sends a map of value lists, older
/// builds a list of single-key records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProxyHeaders {
    Map(BTreeMap<String, Vec<String>>),
    Records(Vec<BTreeMap<String, String>>),
}

impl Default for ProxyHeaders {
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardProxyData {
    #[serde(default)]
    pub url: String,
    pub status: u16,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub body_encoding: Option<ProxyEncoding>,
    #[serde(default)]
    pub headers: ProxyHeaders,
    /// Milliseconds spent on the proxied call.
    #[serde(default)]
    pub elapsed: u64,
}

/// Layer echo fields under any caller-supplied options of the same dialect.
fn echo_options(payload: &EchoPayload, selected: TempOptions) -> TempOptions {
    match selected {
        TempOptions::Fetch(given) => {
            let mapped = FetchOptions {
                headers: payload.headers.clone().map(HeadersInit::Pairs),
                query: payload.query.clone(),
                ..FetchOptions::default()
            };
            let options = match given {
                Some(given) => FetchOptions {
                    base_url: given.base_url,
                    token: given.token,
                    headers: given.headers.or(mapped.headers),
                    query: given.query.or(mapped.query),
                    timeout: given.timeout,
                },
                None => mapped,
            };
            TempOptions::Fetch(Some(options))
        }
        TempOptions::Xhr(given) => {
            let mapped = XhrOptions {
                headers: payload.headers.clone().map(entries_to_record),
                params: payload.query.clone(),
                ..XhrOptions::default()
            };
            let options = match given {
                Some(given) => XhrOptions {
                    base_url: given.base_url,
                    token: given.token,
                    headers: given.headers.or(mapped.headers),
                    params: given.params.or(mapped.params),
                    timeout: given.timeout,
                },
                None => mapped,
            };
            TempOptions::Xhr(Some(options))
        }
    }
}

impl Client {
    /// Ask the kernel to describe the request it received.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn echo(
        &self,
        payload: Option<EchoPayload>,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        let mut request = RequestDescriptor::endpoint(&network::ECHO);
        let options = match &payload {
            Some(payload) => Some(echo_options(payload, options.unwrap_or_else(|| self.kind().into()))),
            None => options,
        };
        if let Some(payload) = payload {
            if let Some(method) = payload.method {
                request.method = method;
            }
            if let Some(body) = payload.body {
                request = request.payload(body);
            }
        }
        self.dispatch(request.options(options)).await?.into_envelope()
    }

    /// Have the kernel perform an HTTP request on the caller's behalf.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn forward_proxy(
        &self,
        payload: &ForwardProxyPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<ForwardProxyData>, ClientError> {
        self.call(&network::FORWARD_PROXY, payload, options).await
    }
}

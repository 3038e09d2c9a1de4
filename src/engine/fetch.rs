//! Fetch-style engine.
//!
//! Instances are immutable: `create()` returns a new engine whose config is
//! the old one merged with the given init, like a fetch wrapper's
//! `create()`. Per-call init is merged the same way for a single request.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::{Blob, ByteStream, Payload, attach_payload, byte_stream, join_url, json_or_text};
use crate::error::ClientError;

/// The three header shapes this dialect accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadersInit {
    /// Ordered `[name, value]` pairs; names may repeat.
    Pairs(Vec<(String, String)>),
    /// A header map instance.
    Map(HeaderMap),
    /// A plain `name -> value` record.
    Record(BTreeMap<String, String>),
}

impl HeadersInit {
    /// Flatten into a header map, keeping repeated names.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for names or values that are
    /// not valid HTTP.
    pub fn to_header_map(&self) -> Result<HeaderMap, ClientError> {
        match self {
            Self::Map(map) => Ok(map.clone()),
            Self::Pairs(pairs) => pairs_to_map(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            Self::Record(record) => pairs_to_map(record.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        }
    }
}

fn pairs_to_map<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
    }
    Ok(map)
}

/// Options in this engine's own dialect. Carries no token: credentials are
/// already folded into `headers` by the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchInit {
    pub base_url: Option<String>,
    pub headers: Option<HeadersInit>,
    pub query: Option<Vec<(String, String)>>,
    pub timeout: Option<Duration>,
}

/// Resolved engine configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchConfig {
    pub base_url: Option<String>,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    /// Merge `init` over this config. Headers named in `init` replace the
    /// same-named defaults; query keys likewise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for invalid headers in `init`.
    pub fn merge(&self, init: FetchInit) -> Result<Self, ClientError> {
        let mut merged = self.clone();
        if let Some(base_url) = init.base_url {
            merged.base_url = Some(base_url);
        }
        if let Some(headers) = init.headers {
            let overrides = headers.to_header_map()?;
            for name in overrides.keys() {
                merged.headers.remove(name);
            }
            for (name, value) in &overrides {
                merged.headers.append(name.clone(), value.clone());
            }
        }
        if let Some(query) = init.query {
            merged.query.retain(|(k, _)| !query.iter().any(|(qk, _)| qk == k));
            merged.query.extend(query);
        }
        if init.timeout.is_some() {
            merged.timeout = init.timeout;
        }
        Ok(merged)
    }
}

/// Response types this dialect understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResponseType {
    ArrayBuffer,
    Blob,
    Json,
    Stream,
    Text,
}

/// Body decoded per [`FetchResponseType`].
pub enum FetchData {
    ArrayBuffer(Bytes),
    Blob(Blob),
    Json(Value),
    Stream(ByteStream),
    Text(String),
}

pub struct FetchResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: FetchData,
}

pub struct FetchRequest<'a> {
    pub method: Method,
    pub body: Option<&'a Payload>,
    pub response_type: FetchResponseType,
}

#[derive(Clone)]
pub struct FetchEngine {
    http: reqwest::Client,
    config: FetchConfig,
}

impl FetchEngine {
    #[must_use]
    pub fn new(http: reqwest::Client, config: FetchConfig) -> Self {
        Self { http, config }
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// A new engine with `init` merged over this one's config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for invalid headers in `init`.
    pub fn create(&self, init: FetchInit) -> Result<Self, ClientError> {
        Ok(self.with_config(self.config.merge(init)?))
    }

    /// A new engine sharing this one's connection pool.
    #[must_use]
    pub fn with_config(&self, config: FetchConfig) -> Self {
        Self { http: self.http.clone(), config }
    }

    /// Issue one request. Never fails on HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection or body-read failure.
    pub async fn fetch(
        &self,
        pathname: &str,
        request: FetchRequest<'_>,
        init: Option<FetchInit>,
    ) -> Result<FetchResponse, ClientError> {
        let config = match init {
            Some(init) => self.config.merge(init)?,
            None => self.config.clone(),
        };

        let mut url = join_url(config.base_url.as_deref(), pathname)?;
        if !config.query.is_empty() {
            url.query_pairs_mut().extend_pairs(config.query.iter());
        }

        let mut builder = self
            .http
            .request(request.method, url)
            .headers(config.headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let response = attach_payload(builder, request.body)?.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let data = match request.response_type {
            FetchResponseType::ArrayBuffer => FetchData::ArrayBuffer(response.bytes().await?),
            FetchResponseType::Blob => FetchData::Blob(Blob::new(response.bytes().await?)),
            FetchResponseType::Json => {
                let bytes = response.bytes().await?;
                json_or_text(&bytes).map_or_else(FetchData::Text, FetchData::Json)
            }
            FetchResponseType::Stream => FetchData::Stream(byte_stream(response)),
            FetchResponseType::Text => FetchData::Text(response.text().await?),
        };
        Ok(FetchResponse { status, headers, data })
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;

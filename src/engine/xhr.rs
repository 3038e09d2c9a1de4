//! XHR-style engine.
//!
//! One long-lived instance; reconfiguration writes straight into its
//! `defaults`. Each request config is layered over those defaults.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::{Blob, ByteStream, Payload, attach_payload, byte_stream, join_url, json_or_text};
use crate::error::ClientError;

/// Persistent engine defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XhrConfig {
    pub base_url: Option<String>,
    pub headers: HeaderMap,
    pub params: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

/// Per-request overrides in this engine's dialect: headers are a plain
/// record, the query string is `params`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XhrOverrides {
    pub base_url: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    pub params: Option<Vec<(String, String)>>,
    pub timeout: Option<Duration>,
}

impl XhrConfig {
    /// Set one default header, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for invalid names or values.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), ClientError> {
        self.headers
            .insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
        Ok(())
    }

    /// Layer request overrides over these defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for invalid override headers.
    pub fn merge(&self, overrides: &XhrOverrides) -> Result<Self, ClientError> {
        let mut merged = self.clone();
        if let Some(base_url) = &overrides.base_url {
            merged.base_url = Some(base_url.clone());
        }
        if let Some(headers) = &overrides.headers {
            for (name, value) in headers {
                merged.set_header(name, value)?;
            }
        }
        if let Some(params) = &overrides.params {
            merged.params.retain(|(k, _)| !params.iter().any(|(pk, _)| pk == k));
            merged.params.extend(params.iter().cloned());
        }
        if overrides.timeout.is_some() {
            merged.timeout = overrides.timeout;
        }
        Ok(merged)
    }
}

/// Response types this dialect understands; note the lower-case
/// `arraybuffer` and the presence of `document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XhrResponseType {
    Arraybuffer,
    Blob,
    Document,
    Json,
    Stream,
    Text,
}

pub enum XhrData {
    Arraybuffer(Bytes),
    Blob(Blob),
    Document(String),
    Json(Value),
    Stream(ByteStream),
    Text(String),
}

pub struct XhrResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: XhrData,
}

pub struct XhrRequestConfig<'a> {
    pub url: &'a str,
    pub method: Method,
    pub data: Option<&'a Payload>,
    pub response_type: XhrResponseType,
    pub overrides: XhrOverrides,
}

#[derive(Clone)]
pub struct XhrEngine {
    http: reqwest::Client,
    pub defaults: XhrConfig,
}

impl XhrEngine {
    #[must_use]
    pub fn new(http: reqwest::Client, defaults: XhrConfig) -> Self {
        Self { http, defaults }
    }

    /// Issue one request. Every status resolves; none is raised.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection or body-read failure.
    pub async fn request(&self, config: XhrRequestConfig<'_>) -> Result<XhrResponse, ClientError> {
        let effective = self.defaults.merge(&config.overrides)?;

        let mut url = join_url(effective.base_url.as_deref(), config.url)?;
        if !effective.params.is_empty() {
            url.query_pairs_mut().extend_pairs(effective.params.iter());
        }

        let mut builder = self
            .http
            .request(config.method, url)
            .headers(effective.headers);
        if let Some(timeout) = effective.timeout {
            builder = builder.timeout(timeout);
        }
        let response = attach_payload(builder, config.data)?.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let data = match config.response_type {
            XhrResponseType::Arraybuffer => XhrData::Arraybuffer(response.bytes().await?),
            XhrResponseType::Blob => XhrData::Blob(Blob::new(response.bytes().await?)),
            XhrResponseType::Document => XhrData::Document(response.text().await?),
            XhrResponseType::Json => {
                let bytes = response.bytes().await?;
                json_or_text(&bytes).map_or_else(XhrData::Text, XhrData::Json)
            }
            XhrResponseType::Stream => XhrData::Stream(byte_stream(response)),
            XhrResponseType::Text => XhrData::Text(response.text().await?),
        };
        Ok(XhrResponse { status, headers, data })
    }
}

#[cfg(test)]
#[path = "xhr_test.rs"]
mod tests;

//! HTTP engines.
//!
//! DESIGN
//! ======
//! Two engines sit behind the dispatch core, each with its own option
//! dialect and response-type vocabulary:
//!
//! - [`fetch::FetchEngine`]: immutable instances; reconfiguring means
//!   `create()`-ing a new instance merged from the old one. Headers arrive as
//!   pairs, a header map, or a plain record. No `document` response type.
//! - [`xhr::XhrEngine`]: one long-lived instance whose `defaults` are mutated
//!   in place. Headers are a plain record, query string is `params`.
//!
//! Both ride on `reqwest`. Neither raises on HTTP status; status policy
//! belongs to the dispatch core.

pub mod fetch;
pub mod xhr;

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use crate::error::ClientError;

/// Engine-neutral response kind requested by a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseKind {
    ArrayBuffer,
    Blob,
    Document,
    #[default]
    Json,
    Stream,
    Text,
}

/// Streaming response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Binary body with the content type it was served with.
///
/// The content type is only known when the dispatch core stamps it from the
/// transport headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

impl Blob {
    #[must_use]
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes, content_type: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { file_name: String, bytes: Bytes, mime: Option<String> },
}

/// Ordered multipart form body. Repeated names are kept, e.g. `file[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    parts: Vec<(String, FormValue)>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn append_file(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Bytes>,
        mime: Option<String>,
    ) -> &mut Self {
        self.parts.push((
            name.into(),
            FormValue::File { file_name: file_name.into(), bytes: bytes.into(), mime },
        ));
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[(String, FormValue)] {
        &self.parts
    }

    /// Build a fresh `reqwest` form; forms are consumed on send.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for an unparseable MIME type.
    pub fn to_multipart(&self) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.parts {
            form = match value {
                FormValue::Text(text) => form.text(name.clone(), text.clone()),
                FormValue::File { file_name, bytes, mime } => {
                    let mut part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(file_name.clone());
                    if let Some(mime) = mime {
                        part = part
                            .mime_str(mime)
                            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
                    }
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

/// Request body handed to an engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Form(FormData),
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<FormData> for Payload {
    fn from(form: FormData) -> Self {
        Self::Form(form)
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrayBuffer => "arrayBuffer",
            Self::Blob => "blob",
            Self::Document => "document",
            Self::Json => "json",
            Self::Stream => "stream",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

pub(crate) fn attach_payload(
    builder: RequestBuilder,
    payload: Option<&Payload>,
) -> Result<RequestBuilder, ClientError> {
    Ok(match payload {
        None => builder,
        Some(Payload::Json(value)) => builder.json(value),
        Some(Payload::Form(form)) => builder.multipart(form.to_multipart()?),
    })
}

/// Join an engine base URL and a request path the way both engines do:
/// exactly one `/` between them, absolute URLs pass through untouched.
pub(crate) fn join_url(base_url: Option<&str>, pathname: &str) -> Result<Url, ClientError> {
    if let Ok(url) = Url::parse(pathname) {
        return Ok(url);
    }
    let Some(base) = base_url else {
        return Err(ClientError::InvalidUrl(format!("relative path '{pathname}' without a base URL")));
    };
    let joined = if pathname.is_empty() {
        base.to_owned()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), pathname.trim_start_matches('/'))
    };
    Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{joined}: {e}")))
}

pub(crate) fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

pub(crate) fn byte_stream(response: reqwest::Response) -> ByteStream {
    Box::pin(response.bytes_stream())
}

pub(crate) async fn collect_stream(stream: ByteStream) -> Result<Bytes, ClientError> {
    let chunks: Vec<Bytes> = stream.try_collect().await?;
    Ok(Bytes::from(chunks.concat()))
}

/// Decode a body as JSON, keeping it as text when it is not JSON.
pub(crate) fn json_or_text(bytes: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(bytes).map_err(|_| String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

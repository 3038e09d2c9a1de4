//! Error taxonomy.
//!
//! Two failure kinds come back from the kernel boundary and callers are
//! expected to tell them apart:
//!
//! - [`KernelError`]: the kernel answered with a well-formed envelope whose
//!   `code` is non-zero. Application-level; inspect `data` for details.
//! - [`HttpError`]: the transport answered with a status outside
//!   {200 OK, 202 Accepted}. Transport-level; carries the raw response.
//!
//! Everything else (connection failures, malformed bodies, bad URLs) is
//! reported through the remaining [`ClientError`] variants. Nothing here is
//! retried or swallowed.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::envelope::Envelope;

/// Transport metadata kept alongside a kernel failure.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// A kernel envelope with a non-zero status code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("kernel error {code}: {msg}")]
pub struct KernelError {
    pub code: i64,
    pub msg: String,
    pub data: Value,
    /// The originating transport response, when the engine exposes one.
    pub response: Option<ResponseMeta>,
}

impl KernelError {
    #[must_use]
    pub fn new(envelope: Envelope<Value>, response: Option<ResponseMeta>) -> Self {
        Self { code: envelope.code, msg: envelope.msg, data: envelope.data, response }
    }

    /// Rebuild the envelope the kernel sent.
    #[must_use]
    pub fn envelope(&self) -> Envelope<Value> {
        Envelope { code: self.code, msg: self.msg.clone(), data: self.data.clone() }
    }
}

/// A transport response outside the accepted status set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unexpected HTTP status {status}")]
pub struct HttpError {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpError {
    /// Body decoded as UTF-8, lossy.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The body as a kernel envelope, if it happens to be one.
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope<Value>> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Errors produced by client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The kernel returned a non-zero envelope code.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// The transport returned a status outside {200, 202}.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The underlying HTTP engine failed (connect, timeout, body read).
    #[error("transport request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A URL could not be parsed or resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value could not be represented.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A payload could not be serialized or a body could not be decoded.
    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The forward proxy returned a body that is not valid base64.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The broadcast WebSocket handshake failed.
    #[error("websocket connect failed: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    /// The response body did not have the shape the call expected.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl ClientError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Kernel(_) => "E_KERNEL",
            Self::Http(_) => "E_HTTP_STATUS",
            Self::Transport(_) => "E_TRANSPORT",
            Self::InvalidUrl(_) => "E_INVALID_URL",
            Self::InvalidHeader(_) => "E_INVALID_HEADER",
            Self::Json(_) => "E_JSON",
            Self::Base64(_) => "E_BASE64",
            Self::WebSocket(_) => "E_WEBSOCKET",
            Self::UnexpectedResponse(_) => "E_UNEXPECTED_RESPONSE",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }

    /// The kernel failure, when this is one.
    #[must_use]
    pub fn as_kernel(&self) -> Option<&KernelError> {
        match self {
            Self::Kernel(err) => Some(err),
            _ => None,
        }
    }

    /// The transport status failure, when this is one.
    #[must_use]
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

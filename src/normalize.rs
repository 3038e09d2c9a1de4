//! Option normalizer.
//!
//! Callers describe options in one of two dialects, tagged by engine. This
//! module is the only place that knows how each dialect carries the
//! credential and how the neutral [`ResponseKind`] maps onto each engine's
//! response-type vocabulary.
//!
//! Order of application: engine defaults, then the client's persisted
//! `base_url`/`token`, then per-call overrides.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::config::EngineKind;
use crate::engine::ResponseKind;
use crate::engine::fetch::{FetchEngine, FetchInit, FetchResponseType, HeadersInit};
use crate::engine::xhr::{XhrConfig, XhrOverrides, XhrResponseType};
use crate::error::ClientError;

/// Options shared by both dialects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseOptions {
    pub base_url: Option<String>,
    /// `Some("")` clears the credential on update.
    pub token: Option<String>,
}

/// Fetch-dialect options: headers in any of three shapes, `query` for the
/// query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub headers: Option<HeadersInit>,
    pub query: Option<Vec<(String, String)>>,
    pub timeout: Option<Duration>,
}

/// XHR-dialect options: headers as a record, `params` for the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XhrOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    pub params: Option<Vec<(String, String)>>,
    pub timeout: Option<Duration>,
}

impl From<BaseOptions> for FetchOptions {
    fn from(base: BaseOptions) -> Self {
        Self { base_url: base.base_url, token: base.token, ..Self::default() }
    }
}

impl From<BaseOptions> for XhrOptions {
    fn from(base: BaseOptions) -> Self {
        Self { base_url: base.base_url, token: base.token, ..Self::default() }
    }
}

/// Options for a persistent update, tagged by the dialect they are written in.
#[derive(Debug, Clone, PartialEq)]
pub enum Options {
    Fetch(FetchOptions),
    Xhr(XhrOptions),
}

impl Options {
    #[must_use]
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Fetch(_) => EngineKind::Fetch,
            Self::Xhr(_) => EngineKind::Xhr,
        }
    }

    /// The dialect-independent part.
    #[must_use]
    pub fn base(&self) -> BaseOptions {
        match self {
            Self::Fetch(o) => BaseOptions { base_url: o.base_url.clone(), token: o.token.clone() },
            Self::Xhr(o) => BaseOptions { base_url: o.base_url.clone(), token: o.token.clone() },
        }
    }
}

/// Per-call engine selection, optionally with overrides in that engine's
/// dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum TempOptions {
    Fetch(Option<FetchOptions>),
    Xhr(Option<XhrOptions>),
}

impl TempOptions {
    #[must_use]
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::Fetch(_) => EngineKind::Fetch,
            Self::Xhr(_) => EngineKind::Xhr,
        }
    }
}

impl From<EngineKind> for TempOptions {
    fn from(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Fetch => Self::Fetch(None),
            EngineKind::Xhr => Self::Xhr(None),
        }
    }
}

impl From<Options> for TempOptions {
    fn from(options: Options) -> Self {
        match options {
            Options::Fetch(o) => Self::Fetch(Some(o)),
            Options::Xhr(o) => Self::Xhr(Some(o)),
        }
    }
}

#[must_use]
pub fn auth_value(token: &str) -> String {
    format!("Token {token}")
}

fn is_auth(name: &str) -> bool {
    name.eq_ignore_ascii_case(AUTHORIZATION.as_str())
}

/// Fold a credential into whichever header shape is present.
///
/// Any existing `Authorization` entry is replaced rather than appended to.
/// Without headers, a record holding only the credential is created. An
/// empty token only strips an existing entry.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHeader`] when the token is not a valid
/// header value.
pub fn inject_token(headers: Option<HeadersInit>, token: &str) -> Result<Option<HeadersInit>, ClientError> {
    let value = (!token.is_empty()).then(|| auth_value(token));
    let headers = match headers {
        None => value.map(|v| HeadersInit::Record(BTreeMap::from([("Authorization".to_owned(), v)]))),
        Some(HeadersInit::Pairs(mut pairs)) => {
            pairs.retain(|(name, _)| !is_auth(name));
            pairs.extend(value.map(|v| ("Authorization".to_owned(), v)));
            Some(HeadersInit::Pairs(pairs))
        }
        Some(HeadersInit::Map(mut map)) => {
            map.remove(AUTHORIZATION);
            if let Some(v) = value {
                map.insert(AUTHORIZATION, HeaderValue::from_str(&v)?);
            }
            Some(HeadersInit::Map(map))
        }
        Some(HeadersInit::Record(mut record)) => {
            record.retain(|name, _| !is_auth(name));
            record.extend(value.map(|v| ("Authorization".to_owned(), v)));
            Some(HeadersInit::Record(record))
        }
    };
    Ok(headers)
}

/// Convert fetch-dialect options into the engine's own init. The token is
/// moved into the headers and dropped from the result.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHeader`] for an unrepresentable token.
pub fn fetch_init(options: FetchOptions) -> Result<FetchInit, ClientError> {
    let FetchOptions { base_url, token, headers, query, timeout } = options;
    let headers = match token.as_deref() {
        Some(token) if !token.is_empty() => inject_token(headers, token)?,
        _ => headers,
    };
    Ok(FetchInit { base_url, headers, query, timeout })
}

/// Resolve a persistent fetch update by `create()`-ing a new engine from
/// `engine`; the old one is left untouched.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHeader`] for invalid headers or token.
pub fn apply_fetch(engine: &FetchEngine, options: FetchOptions) -> Result<FetchEngine, ClientError> {
    let clear_auth = options.token.as_deref() == Some("");
    let created = engine.create(fetch_init(options)?)?;
    if !clear_auth {
        return Ok(created);
    }
    let mut config = created.config().clone();
    config.headers.remove(AUTHORIZATION);
    Ok(created.with_config(config))
}

/// Convert XHR-dialect options into per-request overrides.
#[must_use]
pub fn xhr_overrides(options: XhrOptions) -> XhrOverrides {
    let XhrOptions { base_url, token, headers, params, timeout } = options;
    let headers = match token.as_deref() {
        Some(token) if !token.is_empty() => {
            let mut headers = headers.unwrap_or_default();
            headers.retain(|name, _| !is_auth(name));
            headers.insert("Authorization".to_owned(), auth_value(token));
            Some(headers)
        }
        _ => headers,
    };
    XhrOverrides { base_url, headers, params, timeout }
}

/// Write a persistent update into the XHR engine's defaults, field by field.
/// The token re-derives the `Authorization` default.
///
/// # Errors
///
/// Returns [`ClientError::InvalidHeader`] for invalid headers or token.
pub fn apply_xhr(defaults: &mut XhrConfig, options: XhrOptions) -> Result<(), ClientError> {
    let XhrOptions { base_url, token, headers, params, timeout } = options;
    if let Some(base_url) = base_url {
        defaults.base_url = Some(base_url);
    }
    if let Some(headers) = headers {
        for (name, value) in &headers {
            if !is_auth(name) {
                defaults.set_header(name, value)?;
            }
        }
    }
    if let Some(token) = token {
        if token.is_empty() {
            defaults.headers.remove(AUTHORIZATION);
        } else {
            defaults.headers.insert(AUTHORIZATION, HeaderValue::from_str(&auth_value(&token))?);
        }
    }
    if let Some(params) = params {
        defaults.params.retain(|(k, _)| !params.iter().any(|(pk, _)| pk == k));
        defaults.params.extend(params);
    }
    if timeout.is_some() {
        defaults.timeout = timeout;
    }
    Ok(())
}

#[must_use]
pub fn fetch_response_type(kind: ResponseKind) -> FetchResponseType {
    match kind {
        ResponseKind::ArrayBuffer => FetchResponseType::ArrayBuffer,
        ResponseKind::Blob => FetchResponseType::Blob,
        // no document parser on this engine
        ResponseKind::Document | ResponseKind::Text => FetchResponseType::Text,
        ResponseKind::Json => FetchResponseType::Json,
        ResponseKind::Stream => FetchResponseType::Stream,
    }
}

#[must_use]
pub fn xhr_response_type(kind: ResponseKind) -> XhrResponseType {
    match kind {
        ResponseKind::ArrayBuffer => XhrResponseType::Arraybuffer,
        ResponseKind::Blob => XhrResponseType::Blob,
        ResponseKind::Document => XhrResponseType::Document,
        ResponseKind::Json => XhrResponseType::Json,
        ResponseKind::Stream => XhrResponseType::Stream,
        ResponseKind::Text => XhrResponseType::Text,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

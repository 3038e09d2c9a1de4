//! Client and dispatch core.
//!
//! DESIGN
//! ======
//! Every typed method builds a [`RequestDescriptor`] and funnels it through
//! [`Client::dispatch`]. Dispatch picks an engine (per-call selection first,
//! then the client default), maps the neutral [`ResponseKind`] into that
//! engine's vocabulary, issues the call, and applies one status policy to
//! whatever comes back:
//!
//! - `200 OK`: a `blob` body is stamped with the response `content-type`.
//! - `202 Accepted` from `getFile`: the body is a kernel envelope, parsed as
//!   such. Other endpoints treat 202 like 200.
//! - anything else: [`HttpError`] with the raw response.
//!
//! When the call is `normal`, asked for `json`, and got a JSON object, the
//! object goes through the envelope parser. Everything else is handed back
//! untouched in [`ResponseData`].
//!
//! Both engine handles live on the client. Updates take `&mut self`, are
//! computed in full before being assigned, and always reach both engines.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::endpoints::{Endpoint, file};
use crate::config::{EngineKind, KernelConfig};
use crate::engine::fetch::{FetchConfig, FetchData, FetchEngine, FetchRequest};
use crate::engine::xhr::{XhrConfig, XhrData, XhrEngine, XhrRequestConfig};
use crate::engine::{Blob, ByteStream, Payload, ResponseKind, collect_stream, content_type};
use crate::envelope::{self, Envelope};
use crate::error::{ClientError, HttpError, ResponseMeta};
use crate::normalize::{self, FetchOptions, Options, TempOptions, XhrOptions};

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// One call, built by a typed method and consumed once by dispatch.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub pathname: Cow<'static, str>,
    pub method: Method,
    pub payload: Option<Payload>,
    pub response_kind: ResponseKind,
    /// Unwrap a kernel envelope from JSON object responses.
    pub normal: bool,
    pub options: Option<TempOptions>,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(pathname: impl Into<Cow<'static, str>>, method: Method) -> Self {
        Self {
            pathname: pathname.into(),
            method,
            payload: None,
            response_kind: ResponseKind::Json,
            normal: true,
            options: None,
        }
    }

    #[must_use]
    pub fn endpoint(endpoint: &Endpoint) -> Self {
        Self::new(endpoint.pathname, endpoint.method.clone())
    }

    #[must_use]
    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    #[must_use]
    pub fn response_kind(mut self, kind: ResponseKind) -> Self {
        self.response_kind = kind;
        self
    }

    /// Return the body as-is, even when it is a JSON envelope.
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.normal = false;
        self
    }

    #[must_use]
    pub fn options(mut self, options: Option<TempOptions>) -> Self {
        self.options = options;
        self
    }
}

/// Dispatch result, tagged by what the body turned out to be.
pub enum ResponseData {
    /// A checked kernel envelope (`code == 0`).
    Envelope(Envelope<Value>),
    ArrayBuffer(Bytes),
    Blob(Blob),
    Document(String),
    Json(Value),
    Stream(ByteStream),
    Text(String),
}

impl fmt::Debug for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope(e) => f.debug_tuple("Envelope").field(e).finish(),
            Self::ArrayBuffer(b) => f.debug_tuple("ArrayBuffer").field(&b.len()).finish(),
            Self::Blob(b) => f.debug_tuple("Blob").field(b).finish(),
            Self::Document(t) => f.debug_tuple("Document").field(t).finish(),
            Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
        }
    }
}

impl ResponseData {
    /// Read a checked envelope out of the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Kernel`] for a non-zero code, or
    /// [`ClientError::UnexpectedResponse`] when the body is not an envelope.
    pub fn into_envelope(self) -> Result<Envelope<Value>, ClientError> {
        match self {
            Self::Envelope(envelope) => Ok(envelope),
            Self::Json(value) => envelope::parse(value),
            Self::ArrayBuffer(bytes) => envelope::parse(bytes),
            Self::Blob(blob) => envelope::parse(blob.bytes),
            Self::Document(text) | Self::Text(text) => envelope::parse(Bytes::from(text)),
            Self::Stream(_) => Err(ClientError::UnexpectedResponse("stream body cannot hold an envelope".into())),
        }
    }

    /// The body as bytes; envelopes and JSON are re-serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if a stream fails mid-read.
    pub async fn into_bytes(self) -> Result<Bytes, ClientError> {
        match self {
            Self::Envelope(envelope) => Ok(Bytes::from(serde_json::to_vec(&envelope)?)),
            Self::Json(value) => Ok(Bytes::from(serde_json::to_vec(&value)?)),
            Self::ArrayBuffer(bytes) => Ok(bytes),
            Self::Blob(blob) => Ok(blob.bytes),
            Self::Document(text) | Self::Text(text) => Ok(Bytes::from(text)),
            Self::Stream(stream) => collect_stream(stream).await,
        }
    }
}

fn from_fetch(kind: ResponseKind, data: FetchData) -> ResponseData {
    match data {
        FetchData::ArrayBuffer(bytes) => ResponseData::ArrayBuffer(bytes),
        FetchData::Blob(blob) => ResponseData::Blob(blob),
        FetchData::Json(value) => ResponseData::Json(value),
        FetchData::Stream(stream) => ResponseData::Stream(stream),
        FetchData::Text(text) if kind == ResponseKind::Document => ResponseData::Document(text),
        FetchData::Text(text) => ResponseData::Text(text),
    }
}

fn from_xhr(data: XhrData) -> ResponseData {
    match data {
        XhrData::Arraybuffer(bytes) => ResponseData::ArrayBuffer(bytes),
        XhrData::Blob(blob) => ResponseData::Blob(blob),
        XhrData::Document(text) => ResponseData::Document(text),
        XhrData::Json(value) => ResponseData::Json(value),
        XhrData::Stream(stream) => ResponseData::Stream(stream),
        XhrData::Text(text) => ResponseData::Text(text),
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Typed kernel client over two interchangeable HTTP engines.
#[derive(Clone)]
pub struct Client {
    kind: EngineKind,
    base_url: String,
    token: String,
    fetch: FetchEngine,
    xhr: XhrEngine,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("kind", &self.kind)
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client whose default engine is the one `options` is written
    /// for, with `options` applied over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the options
    /// carry invalid headers.
    pub fn new(options: Options) -> Result<Self, ClientError> {
        let mut client = Self::from_config(&KernelConfig { engine: options.kind(), ..KernelConfig::default() })?;
        client.update_options(options)?;
        Ok(client)
    }

    /// Build a client from typed config. Both engines are created eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the token is
    /// not a valid header value.
    pub fn from_config(config: &KernelConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()?;

        let mut headers = HeaderMap::new();
        if !config.token.is_empty() {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&normalize::auth_value(&config.token))?);
        }

        let fetch = FetchEngine::new(
            http.clone(),
            FetchConfig { base_url: Some(config.base_url.clone()), headers: headers.clone(), ..FetchConfig::default() },
        );
        let xhr = XhrEngine::new(
            http,
            XhrConfig {
                base_url: Some(config.base_url.clone()),
                headers,
                params: Vec::new(),
                timeout: Some(config.request_timeout()),
            },
        );

        tracing::debug!(engine = %config.engine, base_url = %config.base_url, "kernel client created");
        Ok(Self { kind: config.engine, base_url: config.base_url.clone(), token: config.token.clone(), fetch, xhr })
    }

    /// Build a client from `SIYUAN_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`KernelConfig::from_env`] and [`Client::from_config`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&KernelConfig::from_env()?)
    }

    #[must_use]
    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn fetch_engine(&self) -> &FetchEngine {
        &self.fetch
    }

    #[must_use]
    pub fn xhr_engine(&self) -> &XhrEngine {
        &self.xhr
    }

    /// Change the engine used when a call does not pick one.
    pub fn set_client_type(&mut self, kind: EngineKind) {
        self.kind = kind;
    }

    /// Apply persistent options. `base_url` and `token` reach both engines;
    /// dialect-specific fields only the engine they are written for.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] for invalid headers or token.
    /// Nothing is changed on error.
    pub fn update_options(&mut self, options: Options) -> Result<(), ClientError> {
        let kind = options.kind();
        let base = options.base();
        let mut xhr_defaults = self.xhr.defaults.clone();
        let fetch = match options {
            Options::Fetch(fetch_options) => {
                normalize::apply_xhr(&mut xhr_defaults, XhrOptions::from(base.clone()))?;
                normalize::apply_fetch(&self.fetch, fetch_options)?
            }
            Options::Xhr(xhr_options) => {
                normalize::apply_xhr(&mut xhr_defaults, xhr_options)?;
                normalize::apply_fetch(&self.fetch, FetchOptions::from(base.clone()))?
            }
        };

        self.fetch = fetch;
        self.xhr.defaults = xhr_defaults;
        if let Some(base_url) = base.base_url {
            self.base_url = base_url;
        }
        if let Some(token) = base.token {
            self.token = token;
        }
        tracing::info!(engine = %kind, base_url = %self.base_url, "client options updated");
        Ok(())
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Issue one request through the selected engine and apply the status
    /// and envelope policy.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Kernel`] for a non-zero envelope code
    /// - [`ClientError::Http`] for a status outside {200, 202}
    /// - [`ClientError::Transport`] when the engine itself fails
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<ResponseData, ClientError> {
        let RequestDescriptor { pathname, method, payload, response_kind, normal, options } = request;
        let options = options.unwrap_or_else(|| TempOptions::from(self.kind));
        tracing::debug!(
            pathname = %pathname,
            method = %method,
            engine = %options.kind(),
            response_kind = %response_kind,
            "dispatching kernel request"
        );

        let (status, headers, data) = match options {
            TempOptions::Fetch(fetch_options) => {
                let init = fetch_options.map(normalize::fetch_init).transpose()?;
                let response = self
                    .fetch
                    .fetch(
                        &pathname,
                        FetchRequest {
                            method,
                            body: payload.as_ref(),
                            response_type: normalize::fetch_response_type(response_kind),
                        },
                        init,
                    )
                    .await?;
                (response.status, response.headers, from_fetch(response_kind, response.data))
            }
            TempOptions::Xhr(xhr_options) => {
                let response = self
                    .xhr
                    .request(XhrRequestConfig {
                        url: &pathname,
                        method,
                        data: payload.as_ref(),
                        response_type: normalize::xhr_response_type(response_kind),
                        overrides: xhr_options.map(normalize::xhr_overrides).unwrap_or_default(),
                    })
                    .await?;
                (response.status, response.headers, from_xhr(response.data))
            }
        };

        settle(&pathname, response_kind, normal, ResponseMeta { status, headers }, data).await
    }

    /// Call a JSON endpoint and decode the envelope's `data`.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`], plus [`ClientError::Json`] when the payload
    /// cannot be serialized or `data` does not match `D`.
    pub async fn call<P, D>(
        &self,
        endpoint: &Endpoint,
        payload: &P,
        options: Option<TempOptions>,
    ) -> Result<Envelope<D>, ClientError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let request = RequestDescriptor::endpoint(endpoint)
            .payload(serde_json::to_value(payload)?)
            .options(options);
        self.dispatch(request).await?.into_envelope()?.into_typed()
    }

    /// Call a JSON endpoint that takes no request body.
    ///
    /// # Errors
    ///
    /// As [`Client::call`].
    pub async fn call_empty<D: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        options: Option<TempOptions>,
    ) -> Result<Envelope<D>, ClientError> {
        let request = RequestDescriptor::endpoint(endpoint).options(options);
        self.dispatch(request).await?.into_envelope()?.into_typed()
    }
}

async fn settle(
    pathname: &str,
    kind: ResponseKind,
    normal: bool,
    meta: ResponseMeta,
    data: ResponseData,
) -> Result<ResponseData, ClientError> {
    match meta.status {
        StatusCode::OK => {}
        StatusCode::ACCEPTED if pathname == file::GET_FILE.pathname => {
            let body = data.into_bytes().await?;
            let value: Value = serde_json::from_slice(&body)?;
            return Ok(ResponseData::Envelope(envelope::parse((value, meta))?));
        }
        StatusCode::ACCEPTED => {}
        status => {
            tracing::warn!(pathname, %status, "kernel answered with unexpected HTTP status");
            let body = data.into_bytes().await?;
            return Err(HttpError { status, headers: meta.headers, body }.into());
        }
    }

    match data {
        ResponseData::Blob(mut blob) if meta.status == StatusCode::OK => {
            blob.content_type = content_type(&meta.headers);
            Ok(ResponseData::Blob(blob))
        }
        ResponseData::Json(value) if normal && kind == ResponseKind::Json && value.is_object() => {
            Ok(ResponseData::Envelope(envelope::parse((value, meta))?))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

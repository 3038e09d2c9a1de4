//! Broadcast channel.
//!
//! [`build_channel_url`] turns the kernel base URL into the `ws(s)` URL of
//! `/ws/broadcast`. The token rides in the query string because a browser
//! handshake cannot carry an `Authorization` header. [`Client::broadcast`]
//! additionally opens the socket; framing is left to the caller.

use reqwest::Url;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::api::endpoints::ws;
use crate::client::Client;
use crate::error::ClientError;
use crate::normalize::BaseOptions;

pub type BroadcastStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Query parameters of a broadcast connection, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastParams {
    pairs: Vec<(String, String)>,
}

impl BroadcastParams {
    /// Parameters naming a single channel.
    #[must_use]
    pub fn channel(name: impl Into<String>) -> Self {
        Self::default().with("channel", name)
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BroadcastParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Build the broadcast URL for `base_url`.
///
/// A leading `http` becomes `ws`, so `https` maps to `wss`. Any query on the
/// base URL is replaced by `params`, followed by `token` when non-empty. A
/// non-empty `token` replaces any `token` already in `params`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] when `base_url` does not parse.
pub fn build_channel_url(params: &BroadcastParams, base_url: &str, token: &str) -> Result<Url, ClientError> {
    let rewritten = match base_url.strip_prefix("http") {
        Some(rest) => format!("ws{rest}"),
        None => base_url.to_owned(),
    };
    let mut url = Url::parse(&rewritten).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

    let path = format!("{}{}", url.path().trim_end_matches('/'), ws::BROADCAST);
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    if !params.pairs.is_empty() || !token.is_empty() {
        let mut query = url.query_pairs_mut();
        let pairs = params.pairs.iter().filter(|(k, _)| token.is_empty() || k != "token");
        query.extend_pairs(pairs.map(|(k, v)| (k.as_str(), v.as_str())));
        if !token.is_empty() {
            query.append_pair("token", token);
        }
    }
    Ok(url)
}

impl Client {
    /// Broadcast URL from this client's base URL and token, or per-call
    /// overrides of either. A per-call empty token opens the channel without
    /// credentials.
    ///
    /// # Errors
    ///
    /// As [`build_channel_url`].
    pub fn broadcast_url(&self, params: &BroadcastParams, options: Option<BaseOptions>) -> Result<Url, ClientError> {
        let options = options.unwrap_or_default();
        let base_url = options.base_url.as_deref().unwrap_or(self.base_url());
        let token = options.token.as_deref().unwrap_or(self.token());
        build_channel_url(params, base_url, token)
    }

    /// Open a broadcast connection, offering `protocols` as subprotocols.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] when the base URL does not parse
    /// - [`ClientError::InvalidHeader`] for a protocol that is not a valid
    ///   header value
    /// - [`ClientError::WebSocket`] when the handshake fails
    pub async fn broadcast(
        &self,
        params: &BroadcastParams,
        protocols: &[&str],
        options: Option<BaseOptions>,
    ) -> Result<BroadcastStream, ClientError> {
        let url = self.broadcast_url(params, options)?;
        tracing::debug!(host = ?url.host_str(), path = url.path(), "opening broadcast channel");

        let mut request = url.as_str().into_client_request()?;
        if !protocols.is_empty() {
            request
                .headers_mut()
                .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_str(&protocols.join(", "))?);
        }
        let (stream, _) = connect_async(request).await?;
        Ok(stream)
    }
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;

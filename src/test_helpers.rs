//! In-process mock kernel for dispatch, shim and typed-surface tests.
//!
//! Every path answers `200 {"code":0,"msg":"","data":null}` unless a canned
//! response was registered for it. `/api/network/echo` reflects the request
//! back, and `/ws/broadcast` greets with its raw query then echoes text
//! frames.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{RawQuery, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde_json::{Value, json};

use crate::client::Client;
use crate::config::{EngineKind, KernelConfig};

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Default)]
struct MockState {
    canned: Mutex<HashMap<String, Canned>>,
    recorded: Mutex<Vec<Recorded>>,
}

pub struct MockKernel {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockKernel {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/ws/broadcast", any(broadcast))
            .fallback(handle)
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base_url: format!("http://{addr}"), state }
    }

    /// Answer `path` with an arbitrary status, content type and body.
    pub fn respond(&self, path: &str, status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) {
        self.state
            .canned
            .lock()
            .unwrap()
            .insert(path.to_owned(), Canned { status, content_type, body: body.into() });
    }

    /// Answer `path` with a JSON body and status 200.
    pub fn respond_json(&self, path: &str, body: &Value) {
        self.respond(path, StatusCode::OK, "application/json", body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    pub fn client(&self, engine: EngineKind, token: &str) -> Client {
        Client::from_config(&KernelConfig {
            engine,
            base_url: self.base_url.clone(),
            token: token.to_owned(),
            ..KernelConfig::default()
        })
        .unwrap()
    }
}

async fn handle(State(state): State<Arc<MockState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let recorded = Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
        query: parts.uri.query().map(str::to_owned),
        headers: parts.headers.clone(),
        body: body.clone(),
    };
    state.recorded.lock().unwrap().push(recorded.clone());

    let canned = state.canned.lock().unwrap().get(&recorded.path).cloned();
    if let Some(canned) = canned {
        return Response::builder()
            .status(canned.status)
            .header(header::CONTENT_TYPE, canned.content_type)
            .body(Body::from(canned.body))
            .unwrap();
    }

    let data = if recorded.path == "/api/network/echo" { echo(&recorded) } else { Value::Null };
    axum::Json(json!({ "code": 0, "msg": "", "data": data })).into_response()
}

fn echo(recorded: &Recorded) -> Value {
    let headers: serde_json::Map<String, Value> = recorded
        .headers
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v.to_str().unwrap_or_default())))
        .collect();
    json!({
        "method": recorded.method,
        "path": recorded.path,
        "query": recorded.query,
        "headers": headers,
        "body": String::from_utf8_lossy(&recorded.body),
    })
}

async fn broadcast(ws: WebSocketUpgrade, RawQuery(query): RawQuery, headers: HeaderMap) -> Response {
    let protocol = headers
        .get(header::SEC_WEBSOCKET_PROTOCOL)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_owned());
    let ws = match protocol {
        Some(protocol) => ws.protocols([protocol]),
        None => ws,
    };
    ws.on_upgrade(move |socket| echo_socket(socket, query.unwrap_or_default()))
}

async fn echo_socket(mut socket: WebSocket, query: String) {
    if socket.send(Message::Text(query.into())).await.is_err() {
        return;
    }
    while let Some(Ok(message)) = socket.recv().await {
        match message {
            Message::Text(text) => {
                if socket.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

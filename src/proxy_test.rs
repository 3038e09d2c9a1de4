use super::*;
use crate::config::EngineKind;
use crate::test_helpers::MockKernel;
use serde_json::json;

fn header_map(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(*name, HeaderValue::from_static(value));
    }
    map
}

// =============================================================================
// HEADER CONVERSION
// =============================================================================

#[test]
fn record_joins_repeated_values() {
    let headers = header_map(&[("accept", "text/html"), ("accept", "application/json"), ("x-one", "1")]);
    let record = headers_to_record(&headers);
    assert_eq!(record["accept"], "text/html, application/json");
    assert_eq!(record["x-one"], "1");
}

#[test]
fn records_keep_one_entry_per_value() {
    let headers = header_map(&[("x-a", "1"), ("x-a", "2")]);
    let records = headers_to_records(&headers);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["x-a"], "1");
    assert_eq!(records[1]["x-a"], "2");
}

#[test]
fn proxy_headers_expand_both_shapes() {
    let map = ProxyHeaders::Map(BTreeMap::from([("set-cookie".to_owned(), vec!["a=1".to_owned(), "b=2".to_owned()])]));
    assert_eq!(
        headers_to_entries(&map),
        vec![("set-cookie".to_owned(), "a=1".to_owned()), ("set-cookie".to_owned(), "b=2".to_owned())]
    );

    let records = ProxyHeaders::Records(vec![BTreeMap::from([("x".to_owned(), "1".to_owned())])]);
    assert_eq!(headers_to_entries(&records), vec![("x".to_owned(), "1".to_owned())]);
}

#[test]
fn entries_collapse_last_wins() {
    let record = entries_to_record([("a", "1"), ("a", "2"), ("b", "3")]);
    assert_eq!(record["a"], "2");
    assert_eq!(record.len(), 2);
}

// =============================================================================
// REQUEST RESOLUTION
// =============================================================================

#[test]
fn relative_url_resolves_against_base_with_get_default() {
    let request =
        ProxyRequest::resolve("/api/system/version".into(), RequestInit::default(), "http://kernel:6806").unwrap();
    assert_eq!(request.url.as_str(), "http://kernel:6806/api/system/version");
    assert_eq!(request.method, Method::GET);
    assert!(request.body.is_empty());
}

#[test]
fn init_overrides_request_input() {
    let base = ProxyRequest {
        url: Url::parse("https://example.com/a").unwrap(),
        method: Method::GET,
        headers: header_map(&[("x-old", "1")]),
        body: Bytes::from_static(b"old"),
    };
    let init = RequestInit {
        method: Some(Method::POST),
        headers: Some(HeadersInit::Pairs(vec![("x-new".into(), "2".into())])),
        body: Some(Bytes::from_static(b"new")),
    };
    let request = ProxyRequest::resolve(base.into(), init, "http://unused").unwrap();
    assert_eq!(request.url.as_str(), "https://example.com/a");
    assert_eq!(request.method, Method::POST);
    assert!(request.headers.get("x-old").is_none());
    assert_eq!(request.headers["x-new"], "2");
    assert_eq!(request.body.as_ref(), b"new");
}

#[test]
fn unresolvable_url_is_rejected() {
    let err = ProxyRequest::resolve("/x".into(), RequestInit::default(), "not a url").unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_URL");
}

// =============================================================================
// ROUND TRIP
// =============================================================================

#[tokio::test]
async fn fetch_round_trips_through_forward_proxy() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/network/forwardProxy",
        &json!({ "code": 0, "msg": "Created", "data": {
            "url": "https://example.com/items",
            "status": 201,
            "contentType": "text/plain",
            "body": "aGVsbG8=",
            "bodyEncoding": "base64",
            "headers": { "set-cookie": ["a=1", "b=2"], "content-type": ["text/plain"] },
            "elapsed": 3
        } }),
    );

    let client = kernel.client(EngineKind::Xhr, "");
    let init = RequestInit {
        method: Some(Method::POST),
        headers: Some(HeadersInit::Pairs(vec![("x-a".into(), "1".into()), ("x-a".into(), "2".into())])),
        body: Some(Bytes::from_static(b"ping")),
    };
    let response = client.fetch("https://example.com/items", Some(init)).await.unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.ok());
    assert_eq!(response.status_text, "Created");
    assert_eq!(response.headers.get_all("set-cookie").iter().count(), 2);
    assert_eq!(response.headers["content-type"], "text/plain");
    assert_eq!(response.text(), "hello");

    let sent: Value = serde_json::from_slice(&kernel.last_request().body).unwrap();
    assert_eq!(sent["url"], "https://example.com/items");
    assert_eq!(sent["method"], "POST");
    assert_eq!(sent["payload"], "cGluZw==");
    assert_eq!(sent["payloadEncoding"], "base64");
    assert_eq!(sent["responseEncoding"], "base64");
    assert_eq!(sent["timeout"], 60000);
    assert_eq!(sent["contentType"], "application/json");
    assert_eq!(sent["headers"], json!([{ "x-a": "1" }, { "x-a": "2" }]));
}

#[tokio::test]
async fn proxied_error_status_is_not_an_error() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/network/forwardProxy",
        &json!({ "code": 0, "msg": "", "data": { "status": 404, "body": "", "headers": {} } }),
    );
    let response = kernel.client(EngineKind::Fetch, "").fetch("/missing", None).await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!response.ok());

    let sent: Value = serde_json::from_slice(&kernel.last_request().body).unwrap();
    assert_eq!(sent["url"], format!("{}/missing", kernel.base_url));
    assert_eq!(sent["method"], "GET");
    assert_eq!(sent["payload"], "");
}

#[tokio::test]
async fn proxy_failure_is_kernel_error() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/network/forwardProxy",
        &json!({ "code": -1, "msg": "dial tcp: connection refused", "data": null }),
    );
    let err = kernel.client(EngineKind::Xhr, "").fetch("https://example.com", None).await.unwrap_err();
    let kernel_err = err.as_kernel().unwrap();
    assert_eq!(kernel_err.msg, "dial tcp: connection refused");
}

#[tokio::test]
async fn json_body_decodes() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/network/forwardProxy",
        &json!({ "code": 0, "msg": "", "data": { "status": 200, "body": "eyJvayI6dHJ1ZX0=", "headers": {} } }),
    );
    let response = kernel.client(EngineKind::Xhr, "").fetch("https://example.com", None).await.unwrap();
    let body: Value = response.json().unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

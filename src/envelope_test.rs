use super::*;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::json;

#[test]
fn zero_code_returns_envelope_unchanged() {
    let body = json!({ "code": 0, "msg": "", "data": { "labels": ["a"] } });
    let env = parse(body).unwrap();
    assert_eq!(env.code, 0);
    assert_eq!(env.data, json!({ "labels": ["a"] }));
}

#[test]
fn non_zero_code_raises_kernel_error_with_exact_data() {
    let data = json!({ "closeTimeout": 5000 });
    let body = json!({ "code": -1, "msg": "no auth code", "data": data });
    let err = parse(body).unwrap_err();
    let kernel = err.as_kernel().expect("kernel error");
    assert_eq!(kernel.code, -1);
    assert_eq!(kernel.msg, "no auth code");
    assert_eq!(kernel.data, data);
    assert!(kernel.response.is_none());
}

#[test]
fn wrapper_source_keeps_transport_metadata() {
    let mut headers = HeaderMap::new();
    headers.insert("x-kernel", "1".parse().unwrap());
    let meta = ResponseMeta { status: StatusCode::ACCEPTED, headers };
    let body = json!({ "code": 404, "msg": "not found", "data": null });
    let err = parse((body, meta)).unwrap_err();
    let kernel = err.as_kernel().unwrap();
    let response = kernel.response.as_ref().expect("meta kept");
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.headers.get("x-kernel").unwrap(), "1");
}

#[test]
fn bytes_source_is_decoded() {
    let raw = Bytes::from_static(br#"{"code":0,"msg":"","data":"20240101"}"#);
    let env = parse(raw).unwrap();
    assert_eq!(env.data, json!("20240101"));
}

#[test]
fn missing_msg_defaults_to_empty() {
    let env = parse(json!({ "code": 0, "data": 1 })).unwrap();
    assert_eq!(env.msg, "");
}

#[test]
fn non_envelope_body_is_unexpected_response() {
    let err = parse(json!({ "status": "ok" })).unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedResponse(_)));
}

#[test]
fn into_typed_decodes_data() {
    let env: Envelope<Value> = Envelope { code: 0, msg: String::new(), data: json!(["x", "y"]) };
    let typed: Envelope<Vec<String>> = env.into_typed().unwrap();
    assert_eq!(typed.data, vec!["x".to_owned(), "y".to_owned()]);
}

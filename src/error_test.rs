use super::*;
use serde_json::json;

#[test]
fn kernel_error_round_trips_envelope() {
    let env = Envelope { code: -1, msg: "auth".to_owned(), data: json!({ "closeTimeout": 5000 }) };
    let err = KernelError::new(env.clone(), None);
    assert_eq!(err.envelope(), env);
    assert_eq!(err.to_string(), "kernel error -1: auth");
}

#[test]
fn http_error_exposes_body_text_and_optional_envelope() {
    let err = HttpError {
        status: StatusCode::UNAUTHORIZED,
        headers: HeaderMap::new(),
        body: Bytes::from_static(br#"{"code":-1,"msg":"Auth failed","data":null}"#),
    };
    assert!(err.text().contains("Auth failed"));
    assert_eq!(err.envelope().unwrap().code, -1);

    let plain = HttpError {
        status: StatusCode::BAD_GATEWAY,
        headers: HeaderMap::new(),
        body: Bytes::from_static(b"oops"),
    };
    assert!(plain.envelope().is_none());
    assert_eq!(plain.to_string(), "unexpected HTTP status 502 Bad Gateway");
}

#[test]
fn error_codes_discriminate_kinds() {
    let kernel = ClientError::from(KernelError::new(Envelope { code: 1, msg: String::new(), data: json!(null) }, None));
    assert_eq!(kernel.error_code(), "E_KERNEL");
    assert!(kernel.as_kernel().is_some());
    assert!(kernel.as_http().is_none());

    let http = ClientError::from(HttpError {
        status: StatusCode::NOT_FOUND,
        headers: HeaderMap::new(),
        body: Bytes::new(),
    });
    assert_eq!(http.error_code(), "E_HTTP_STATUS");
    assert_eq!(http.as_http().unwrap().status, StatusCode::NOT_FOUND);

    assert_eq!(ClientError::ConfigParse("x".into()).error_code(), "E_CONFIG_PARSE");
}

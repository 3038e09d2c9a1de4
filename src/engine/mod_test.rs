use super::*;
use serde_json::json;

#[test]
fn join_url_never_doubles_or_drops_separator() {
    let a = join_url(Some("http://host:6806/"), "/api/system/version").unwrap();
    let b = join_url(Some("http://host:6806"), "api/system/version").unwrap();
    assert_eq!(a.as_str(), "http://host:6806/api/system/version");
    assert_eq!(a, b);
}

#[test]
fn join_url_keeps_base_path_prefix() {
    let url = join_url(Some("https://host/siyuan"), "/api/query/sql").unwrap();
    assert_eq!(url.path(), "/siyuan/api/query/sql");
}

#[test]
fn join_url_passes_absolute_urls_through() {
    let url = join_url(Some("http://ignored"), "https://example.com/a?b=1").unwrap();
    assert_eq!(url.as_str(), "https://example.com/a?b=1");
}

#[test]
fn join_url_requires_base_for_relative_paths() {
    let err = join_url(None, "/api/x").unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl(_)));
}

#[test]
fn json_or_text_falls_back_to_text() {
    assert_eq!(json_or_text(br#"{"a":1}"#).unwrap(), json!({ "a": 1 }));
    assert_eq!(json_or_text(b"plain words").unwrap_err(), "plain words");
}

#[test]
fn form_data_keeps_repeated_names_in_order() {
    let mut form = FormData::new();
    form.append_text("assetsDirPath", "/assets/")
        .append_file("file[]", "a.png", Bytes::from_static(b"a"), None)
        .append_file("file[]", "b.png", Bytes::from_static(b"b"), Some("image/png".into()));
    let names: Vec<&str> = form.parts().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["assetsDirPath", "file[]", "file[]"]);
    assert!(form.to_multipart().is_ok());
}

#[test]
fn form_data_rejects_bad_mime() {
    let mut form = FormData::new();
    form.append_file("file", "x", Bytes::new(), Some("not a mime".into()));
    assert!(matches!(form.to_multipart(), Err(ClientError::InvalidHeader(_))));
}

#[test]
fn response_kind_display_uses_neutral_names() {
    assert_eq!(ResponseKind::ArrayBuffer.to_string(), "arrayBuffer");
    assert_eq!(ResponseKind::default(), ResponseKind::Json);
}

use super::*;

#[test]
fn log_filter_follows_rust_log() {
    assert_eq!(log_filter(Some("siyuan_client=debug")).to_string(), "siyuan_client=debug");
}

#[test]
fn log_filter_defaults_to_warn() {
    assert_eq!(log_filter(None).to_string(), "warn");
    assert_eq!(log_filter(Some("siyuan=loud")).to_string(), "warn");
}

use super::*;
use reqwest::header::AUTHORIZATION;

#[test]
fn set_header_replaces_existing_value() {
    let mut config = XhrConfig::default();
    config.set_header("Authorization", "Token a").unwrap();
    config.set_header("authorization", "Token b").unwrap();
    assert_eq!(config.headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(config.headers.get(AUTHORIZATION).unwrap(), "Token b");
}

#[test]
fn merge_layers_overrides_without_touching_defaults() {
    let mut defaults = XhrConfig {
        base_url: Some("http://localhost:6806".into()),
        params: vec![("keep".into(), "1".into()), ("swap".into(), "old".into())],
        timeout: Some(Duration::from_secs(60)),
        ..XhrConfig::default()
    };
    defaults.set_header("Authorization", "Token t").unwrap();

    let overrides = XhrOverrides {
        headers: Some(BTreeMap::from([("X-Trace".to_owned(), "on".to_owned())])),
        params: Some(vec![("swap".into(), "new".into())]),
        timeout: Some(Duration::from_secs(1)),
        ..XhrOverrides::default()
    };
    let merged = defaults.merge(&overrides).unwrap();

    assert_eq!(merged.headers.get(AUTHORIZATION).unwrap(), "Token t");
    assert_eq!(merged.headers.get("x-trace").unwrap(), "on");
    assert_eq!(merged.params, vec![("keep".to_owned(), "1".to_owned()), ("swap".to_owned(), "new".to_owned())]);
    assert_eq!(merged.timeout, Some(Duration::from_secs(1)));
    assert_eq!(defaults.timeout, Some(Duration::from_secs(60)));
    assert!(defaults.headers.get("x-trace").is_none());
}

#[test]
fn invalid_override_header_is_rejected() {
    let overrides = XhrOverrides {
        headers: Some(BTreeMap::from([("x".to_owned(), "bad\nvalue".to_owned())])),
        ..XhrOverrides::default()
    };
    assert!(matches!(XhrConfig::default().merge(&overrides), Err(ClientError::InvalidHeader(_))));
}

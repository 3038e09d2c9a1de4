use super::*;
use reqwest::header::AUTHORIZATION;

fn base_config() -> FetchConfig {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Token old"));
    headers.insert("x-keep", HeaderValue::from_static("1"));
    FetchConfig {
        base_url: Some("http://localhost:6806".into()),
        headers,
        query: vec![("a".into(), "1".into())],
        timeout: None,
    }
}

#[test]
fn headers_init_shapes_flatten_to_same_map() {
    let pairs = HeadersInit::Pairs(vec![("X-A".into(), "1".into())]);
    let record = HeadersInit::Record(BTreeMap::from([("x-a".to_owned(), "1".to_owned())]));
    let mut map = HeaderMap::new();
    map.insert("x-a", HeaderValue::from_static("1"));
    let map = HeadersInit::Map(map);

    let a = pairs.to_header_map().unwrap();
    assert_eq!(a, record.to_header_map().unwrap());
    assert_eq!(a, map.to_header_map().unwrap());
}

#[test]
fn pairs_keep_repeated_names() {
    let pairs = HeadersInit::Pairs(vec![("accept".into(), "a".into()), ("accept".into(), "b".into())]);
    let map = pairs.to_header_map().unwrap();
    assert_eq!(map.get_all("accept").iter().count(), 2);
}

#[test]
fn invalid_header_name_is_rejected() {
    let pairs = HeadersInit::Pairs(vec![("bad name".into(), "v".into())]);
    assert!(matches!(pairs.to_header_map(), Err(ClientError::InvalidHeader(_))));
}

#[test]
fn merge_replaces_named_headers_and_keeps_others() {
    let init = FetchInit {
        headers: Some(HeadersInit::Pairs(vec![("Authorization".into(), "Token new".into())])),
        ..FetchInit::default()
    };
    let merged = base_config().merge(init).unwrap();
    assert_eq!(merged.headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(merged.headers.get(AUTHORIZATION).unwrap(), "Token new");
    assert_eq!(merged.headers.get("x-keep").unwrap(), "1");
}

#[test]
fn merge_overrides_base_url_query_and_timeout() {
    let init = FetchInit {
        base_url: Some("http://other:1".into()),
        query: Some(vec![("a".into(), "2".into()), ("b".into(), "3".into())]),
        timeout: Some(Duration::from_secs(5)),
        ..FetchInit::default()
    };
    let merged = base_config().merge(init).unwrap();
    assert_eq!(merged.base_url.as_deref(), Some("http://other:1"));
    assert_eq!(merged.query, vec![("a".to_owned(), "2".to_owned()), ("b".to_owned(), "3".to_owned())]);
    assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
}

#[test]
fn empty_init_is_identity() {
    let base = base_config();
    assert_eq!(base.merge(FetchInit::default()).unwrap(), base);
}

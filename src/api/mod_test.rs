use bytes::Bytes;
use reqwest::Method;
use serde_json::{Value, json};

use super::asset::{UploadFile, UploadPayload};
use super::block::IdPayload;
use super::file::{PathPayload, PutFileContent, PutFilePayload};
use super::filetree::ListDocsByPathPayload;
use super::network::EchoPayload;
use super::query::SqlPayload;
use super::search::FullTextSearchPayload;
use super::snippet::GetSnippetPayload;
use super::system::ExitPayload;
use super::types::{OrderBy, SearchMethod, SortMode};
use crate::client::ResponseData;
use crate::config::EngineKind;
use crate::engine::ResponseKind;
use crate::normalize::{TempOptions, XhrOptions};
use crate::test_helpers::MockKernel;

const ENGINES: [EngineKind; 2] = [EngineKind::Fetch, EngineKind::Xhr];

fn body_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

// =============================================================================
// ENVELOPE HANDLING
// =============================================================================

#[tokio::test]
async fn logout_auth_surfaces_close_timeout_on_kernel_error() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/system/logoutAuth", &json!({ "code": -1, "msg": "", "data": { "closeTimeout": 5000 } }));

    for engine in ENGINES {
        let err = kernel.client(engine, "").logout_auth(None).await.unwrap_err();
        let kernel_err = err.as_kernel().unwrap();
        assert_eq!(kernel_err.code, -1);
        assert_eq!(kernel_err.data["closeTimeout"], 5000);
        assert_eq!(err.error_code(), "E_KERNEL");
    }
}

#[tokio::test]
async fn bookmark_labels_decode_into_typed_list() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/attr/getBookmarkLabels", &json!({ "code": 0, "msg": "", "data": [] }));
    let envelope = kernel.client(EngineKind::Xhr, "").get_bookmark_labels(None).await.unwrap();
    assert!(envelope.data.is_empty());

    kernel.respond_json("/api/attr/getBookmarkLabels", &json!({ "code": 0, "msg": "", "data": ["a", "b"] }));
    let envelope = kernel.client(EngineKind::Fetch, "").get_bookmark_labels(None).await.unwrap();
    assert_eq!(envelope.data, vec!["a".to_owned(), "b".to_owned()]);
}

#[tokio::test]
async fn version_is_posted_without_body() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/system/version", &json!({ "code": 0, "msg": "", "data": "3.1.0" }));

    for engine in ENGINES {
        let envelope = kernel.client(engine, "").version(None).await.unwrap();
        assert_eq!(envelope.data, "3.1.0");
        let request = kernel.last_request();
        assert_eq!(request.method, "POST");
        assert!(request.body.is_empty(), "{engine}");
    }
}

#[tokio::test]
async fn wrong_data_shape_is_a_json_error() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/system/currentTime", &json!({ "code": 0, "msg": "", "data": "soon" }));
    let err = kernel.client(EngineKind::Xhr, "").current_time(None).await.unwrap_err();
    assert_eq!(err.error_code(), "E_JSON");
}

// =============================================================================
// JSON PAYLOADS
// =============================================================================

#[tokio::test]
async fn sql_sends_statement_and_returns_rows() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/query/sql",
        &json!({ "code": 0, "msg": "", "data": [{ "id": "20230101000000-abcdefg", "type": "d" }] }),
    );

    let rows = kernel
        .client(EngineKind::Fetch, "")
        .sql(&SqlPayload::new("SELECT * FROM blocks LIMIT 1"), None)
        .await
        .unwrap()
        .data;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["type"], "d");

    let request = kernel.last_request();
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(body_json(&request.body), json!({ "stmt": "SELECT * FROM blocks LIMIT 1" }));
}

#[tokio::test]
async fn optional_fields_are_omitted() {
    let kernel = MockKernel::start().await;
    let client = kernel.client(EngineKind::Xhr, "");

    client.exit(&ExitPayload::default(), None).await.unwrap();
    assert_eq!(body_json(&kernel.last_request().body), json!({}));

    let search = FullTextSearchPayload {
        query: "rust".into(),
        method: Some(SearchMethod::Regex),
        order_by: Some(OrderBy::RankDesc),
        ..FullTextSearchPayload::default()
    };
    kernel.respond_json(
        "/api/search/fullTextSearchBlock",
        &json!({ "code": 0, "msg": "", "data": {
            "blocks": [], "matchedBlockCount": 0, "matchedRootCount": 0, "pageCount": 1
        } }),
    );
    let results = client.full_text_search_block(&search, None).await.unwrap().data;
    assert_eq!(results.page_count, 1);
    assert_eq!(body_json(&kernel.last_request().body), json!({ "query": "rust", "method": 3, "orderBy": 7 }));
}

#[tokio::test]
async fn list_docs_sends_numeric_sort() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/filetree/listDocsByPath",
        &json!({ "code": 0, "msg": "", "data": { "box": "nb", "path": "/", "files": [] } }),
    );
    let payload = ListDocsByPathPayload {
        notebook: "nb".into(),
        path: "/".into(),
        sort: Some(SortMode::UpdatedDesc),
        ..ListDocsByPathPayload::default()
    };
    kernel.client(EngineKind::Fetch, "").list_docs_by_path(&payload, None).await.unwrap();
    let body = body_json(&kernel.last_request().body);
    assert_eq!(body["sort"], 3);
    assert_eq!(body["notebook"], "nb");
}

#[tokio::test]
async fn snippet_filter_defaults_to_everything() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/snippet/getSnippet", &json!({ "code": 0, "msg": "", "data": { "snippets": [] } }));
    kernel
        .client(EngineKind::Xhr, "")
        .get_snippet(&GetSnippetPayload::default(), None)
        .await
        .unwrap();
    assert_eq!(body_json(&kernel.last_request().body), json!({ "type": "all", "enabled": 2 }));
}

#[tokio::test]
async fn per_call_options_reach_typed_methods() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/outline/getDocOutline", &json!({ "code": 0, "msg": "", "data": [] }));
    let client = kernel.client(EngineKind::Fetch, "base");
    let options = TempOptions::Xhr(Some(XhrOptions { token: Some("call".into()), ..XhrOptions::default() }));
    client.get_doc_outline(&IdPayload::new("x"), Some(options)).await.unwrap();
    assert_eq!(kernel.last_request().headers["authorization"], "Token call");
}

// =============================================================================
// ECHO
// =============================================================================

#[tokio::test]
async fn echo_maps_payload_into_each_dialect() {
    let kernel = MockKernel::start().await;

    for engine in ENGINES {
        let payload = EchoPayload {
            method: Some(Method::PUT),
            headers: Some(vec![("x-trace".into(), "1".into())]),
            query: Some(vec![("a".into(), "b".into())]),
            body: Some(json!({ "k": "v" })),
        };
        let data = kernel.client(engine, "").echo(Some(payload), None).await.unwrap().data;
        assert_eq!(data["method"], "PUT", "{engine}");
        assert_eq!(data["path"], "/api/network/echo");
        assert_eq!(data["query"], "a=b", "{engine}");
        assert_eq!(data["headers"]["x-trace"], "1", "{engine}");
        assert_eq!(data["body"], r#"{"k":"v"}"#);
    }
}

#[tokio::test]
async fn echo_without_payload_is_a_bare_post() {
    let kernel = MockKernel::start().await;
    let data = kernel.client(EngineKind::Xhr, "").echo(None, None).await.unwrap().data;
    assert_eq!(data["method"], "POST");
    assert_eq!(data["query"], Value::Null);
}

// =============================================================================
// FILES AND FORMS
// =============================================================================

#[tokio::test]
async fn upload_sends_assets_dir_and_file_parts() {
    let kernel = MockKernel::start().await;
    kernel.respond_json(
        "/api/asset/upload",
        &json!({ "code": 0, "msg": "", "data": { "errFiles": [], "succMap": { "a.png": "assets/a-1.png" } } }),
    );
    let payload = UploadPayload {
        assets_dir_path: None,
        files: vec![UploadFile { name: "a.png".into(), bytes: Bytes::from_static(b"PNG"), mime: None }],
    };

    for engine in ENGINES {
        let data = kernel.client(engine, "").upload(&payload, None).await.unwrap().data;
        assert_eq!(data.succ_map["a.png"], "assets/a-1.png");

        let request = kernel.last_request();
        let content_type = request.headers["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("multipart/form-data; boundary="), "{engine}: {content_type}");
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"assetsDirPath\""));
        assert!(body.contains("/assets/"));
        assert!(body.contains("name=\"file[]\"; filename=\"a.png\""));
    }
}

#[tokio::test]
async fn put_file_names_file_after_path() {
    let kernel = MockKernel::start().await;
    let payload = PutFilePayload {
        path: "/data/storage/petal/conf.json".into(),
        is_dir: false,
        mod_time: Some(1_700_000_000),
        file: Some(PutFileContent { bytes: Bytes::from_static(b"{}"), ..PutFileContent::default() }),
    };
    kernel.client(EngineKind::Fetch, "").put_file(&payload, None).await.unwrap();

    let body = String::from_utf8_lossy(&kernel.last_request().body).into_owned();
    assert!(body.contains("name=\"path\""));
    assert!(body.contains("/data/storage/petal/conf.json"));
    assert!(body.contains("name=\"isDir\""));
    assert!(body.contains("false"));
    assert!(body.contains("1700000000"));
    assert!(body.contains("name=\"file\"; filename=\"conf.json\""));
}

#[tokio::test]
async fn get_file_defaults_to_text_and_skips_envelope_parsing() {
    let kernel = MockKernel::start().await;
    kernel.respond_json("/api/file/getFile", &json!({ "theme": "dark" }));

    for engine in ENGINES {
        let client = kernel.client(engine, "");
        let data = client
            .get_file(&PathPayload::new("/data/storage/local.json"), None, None)
            .await
            .unwrap();
        let ResponseData::Text(text) = data else {
            panic!("{engine}: expected text");
        };
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({ "theme": "dark" }));

        let data = client
            .get_file(&PathPayload::new("/data/storage/local.json"), Some(ResponseKind::Json), None)
            .await
            .unwrap();
        assert!(matches!(data, ResponseData::Json(ref v) if v["theme"] == "dark"), "{engine}");
    }
}

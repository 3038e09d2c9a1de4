use super::*;
use serde_json::json;

#[test]
fn block_type_codes_match_kernel() {
    assert_eq!(serde_json::to_value(BlockType::QueryEmbed).unwrap(), json!("query_embed"));
    assert_eq!(serde_json::to_value(BlockType::D).unwrap(), json!("d"));
    assert_eq!(serde_json::from_value::<BlockType>(json!("html")).unwrap(), BlockType::Html);
    assert!(BlockType::L.is_container());
    assert!(!BlockType::P.is_container());
}

#[test]
fn empty_subtype_is_none() {
    assert_eq!(serde_json::from_value::<BlockSubType>(json!("")).unwrap(), BlockSubType::None);
    assert_eq!(serde_json::to_value(BlockSubType::H2).unwrap(), json!("h2"));
}

#[test]
fn search_enums_travel_as_numbers() {
    assert_eq!(serde_json::to_value(SearchMethod::Regex).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(OrderBy::RankDesc).unwrap(), json!(7));
    assert_eq!(serde_json::from_value::<GroupBy>(json!(1)).unwrap(), GroupBy::Document);
    assert!(serde_json::from_value::<SortMode>(json!(99)).is_err());
}

#[test]
fn transaction_reads_kernel_shape() {
    let raw = json!([{
        "timestamp": 0,
        "doOperations": [{
            "action": "insert",
            "data": "<div data-node-id=\"20230101000000-abcdefg\"></div>",
            "id": "20230101000000-abcdefg",
            "parentID": "20230101000000-parent0",
            "previousID": "",
            "retainData": null
        }],
        "undoOperations": null
    }]);
    let tx: Vec<Transaction> = serde_json::from_value(raw).unwrap();
    assert_eq!(tx[0].do_operations[0].parent_id.as_deref(), Some("20230101000000-parent0"));
    assert!(tx[0].undo_operations.is_none());
}

#[test]
fn snippet_type_field_is_renamed() {
    let snippet: Snippet = serde_json::from_value(json!({
        "id": "1", "name": "x", "type": "css", "enabled": true, "content": "a{}"
    }))
    .unwrap();
    assert_eq!(snippet.kind, SnippetType::Css);
}

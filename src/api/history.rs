use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::history;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocHistoryContentPayload {
    /// Absolute `.sy` path inside the history directory.
    pub history_path: String,
    /// Keyword to highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocHistoryContent {
    pub id: String,
    #[serde(rename = "rootID")]
    pub root_id: String,
    pub content: String,
    #[serde(default)]
    pub is_large_doc: bool,
}

/// History search. `op` is one of `all`, `clean`, `update`, `delete`,
/// `format`, `sync`, `replace`; `kind` 0 = doc name, 1 = content,
/// 2 = assets, 3 = doc ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryItemsPayload {
    pub query: String,
    pub page: u32,
    pub op: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItems {
    #[serde(default)]
    pub histories: Vec<Value>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub total_count: u32,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_doc_history_content(
        &self,
        payload: &DocHistoryContentPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<DocHistoryContent>, ClientError> {
        self.call(&history::GET_DOC_HISTORY_CONTENT, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_history_items(
        &self,
        payload: &HistoryItemsPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<HistoryItems>, ClientError> {
        self.call(&history::GET_HISTORY_ITEMS, payload, options).await
    }
}

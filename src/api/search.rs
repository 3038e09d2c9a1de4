use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::search;
use super::types::{GroupBy, OrderBy, SearchMethod};
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTextSearchPayload {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<SearchMethod>,
    /// Block type filter, keyed by type name (`heading`, `paragraph`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, bool>>,
    /// Restrict to notebooks or document paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub blocks: Vec<Value>,
    #[serde(default)]
    pub matched_block_count: u64,
    #[serde(default)]
    pub matched_root_count: u64,
    #[serde(default)]
    pub page_count: u32,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn full_text_search_block(
        &self,
        payload: &FullTextSearchPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<SearchResults>, ClientError> {
        self.call(&search::FULL_TEXT_SEARCH_BLOCK, payload, options).await
    }
}

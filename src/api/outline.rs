use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::block::IdPayload;
use super::endpoints::outline;
use super::types::{BlockSubType, NodeType};
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// One heading in a document outline; `blocks` holds nested headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineItem {
    pub id: String,
    #[serde(rename = "box", default)]
    pub notebook: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub h_path: String,
    /// `outline` for headings listed in an outline.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub node_type: Option<NodeType>,
    #[serde(default)]
    pub sub_type: BlockSubType,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub blocks: Option<Vec<Value>>,
    #[serde(default)]
    pub children: Option<Vec<OutlineItem>>,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_doc_outline(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<OutlineItem>>, ClientError> {
        self.call(&outline::GET_DOC_OUTLINE, payload, options).await
    }
}

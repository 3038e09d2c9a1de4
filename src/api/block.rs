use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::block;
use super::types::{BlockSubType, BlockType, DataType, NodeType, Transaction};
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdPayload {
    pub id: String,
}

impl IdPayload {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Content written under a parent, at its head or tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildWritePayload {
    pub data: String,
    pub data_type: DataType,
    #[serde(rename = "parentID")]
    pub parent_id: String,
}

/// Content inserted relative to an anchor. At least one anchor is required
/// by the kernel; `next_id` wins over `previous_id`, which wins over
/// `parent_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBlockPayload {
    pub data: String,
    pub data_type: DataType,
    #[serde(rename = "nextID", skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
    #[serde(rename = "previousID", skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<String>,
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlockPayload {
    pub id: String,
    pub data: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveBlockPayload {
    pub id: String,
    #[serde(rename = "previousID", skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<String>,
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbPayload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_types: Option<Vec<NodeType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferBlockRefPayload {
    #[serde(rename = "fromID")]
    pub from_id: String,
    #[serde(rename = "toID")]
    pub to_id: String,
    /// Only move these refs; all refs when unset.
    #[serde(rename = "refIDs", skip_serializing_if = "Option::is_none")]
    pub ref_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub sub_type: BlockSubType,
    #[serde(default)]
    pub children: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDom {
    pub id: String,
    pub dom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockKramdown {
    pub id: String,
    pub kramdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    #[serde(rename = "box")]
    pub notebook: String,
    pub path: String,
    #[serde(rename = "rootChildID")]
    pub root_child_id: String,
    #[serde(rename = "rootID")]
    pub root_id: String,
    #[serde(default)]
    pub root_icon: String,
    #[serde(default)]
    pub root_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub sub_type: BlockSubType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfo {
    pub id: String,
    #[serde(rename = "rootID")]
    pub root_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ref_count: i64,
    #[serde(default)]
    pub sub_file_count: i64,
    #[serde(default, rename = "refIDs")]
    pub ref_ids: Vec<String>,
    #[serde(default)]
    pub ial: BTreeMap<String, String>,
    #[serde(default)]
    pub icon: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn append_block(
        &self,
        payload: &ChildWritePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Transaction>>, ClientError> {
        self.call(&block::APPEND_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn delete_block(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Transaction>>, ClientError> {
        self.call(&block::DELETE_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn fold_block(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&block::FOLD_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_block_breadcrumb(
        &self,
        payload: &BreadcrumbPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<BreadcrumbItem>>, ClientError> {
        self.call(&block::GET_BLOCK_BREADCRUMB, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_block_dom(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<BlockDom>, ClientError> {
        self.call(&block::GET_BLOCK_DOM, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_block_info(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<BlockInfo>, ClientError> {
        self.call(&block::GET_BLOCK_INFO, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_block_kramdown(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<BlockKramdown>, ClientError> {
        self.call(&block::GET_BLOCK_KRAMDOWN, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_child_blocks(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<ChildBlock>>, ClientError> {
        self.call(&block::GET_CHILD_BLOCKS, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_doc_info(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<DocInfo>, ClientError> {
        self.call(&block::GET_DOC_INFO, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn insert_block(
        &self,
        payload: &InsertBlockPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Transaction>>, ClientError> {
        self.call(&block::INSERT_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn move_block(
        &self,
        payload: &MoveBlockPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&block::MOVE_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn prepend_block(
        &self,
        payload: &ChildWritePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Transaction>>, ClientError> {
        self.call(&block::PREPEND_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn transfer_block_ref(
        &self,
        payload: &TransferBlockRefPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&block::TRANSFER_BLOCK_REF, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn unfold_block(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&block::UNFOLD_BLOCK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn update_block(
        &self,
        payload: &UpdateBlockPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Transaction>>, ClientError> {
        self.call(&block::UPDATE_BLOCK, payload, options).await
    }
}

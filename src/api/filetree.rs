use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::block::IdPayload;
use super::endpoints::filetree;
use super::types::SortMode;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDailyNotePayload {
    pub notebook: String,
    /// Frontend app ID that should open the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDocWithMdPayload {
    pub notebook: String,
    /// Human-readable path, e.g. `/foo/bar`.
    pub path: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetDocPayload {
    pub id: String,
    /// 0: load from `id`; 1: load upward; 2: downward; 3: up and down; 4: tail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,
}

/// Notebook plus a storage path (`/<id>/<id>.sy`) or human-readable path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotebookPathPayload {
    pub notebook: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocsByPathPayload {
    pub notebook: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashcard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_list_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDocsPayload {
    pub from_paths: Vec<String>,
    pub to_notebook: String,
    pub to_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameDocPayload {
    pub notebook: String,
    pub path: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchDocsPayload {
    /// Keyword.
    pub k: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashcard: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNote {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc {
    pub id: String,
    #[serde(rename = "rootID")]
    pub root_id: String,
    #[serde(rename = "parentID", default)]
    pub parent_id: String,
    #[serde(rename = "box")]
    pub notebook: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub block_count: i64,
    #[serde(default)]
    pub is_backlink_expand: bool,
    #[serde(default)]
    pub mode: i64,
    #[serde(default)]
    pub scroll: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocListing {
    #[serde(rename = "box")]
    pub notebook: String,
    pub path: String,
    #[serde(default)]
    pub files: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSearchItem {
    #[serde(rename = "box")]
    pub notebook: String,
    #[serde(default)]
    pub box_icon: String,
    pub h_path: String,
    pub path: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn create_daily_note(
        &self,
        payload: &CreateDailyNotePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<DailyNote>, ClientError> {
        self.call(&filetree::CREATE_DAILY_NOTE, payload, options).await
    }

    /// Returns the new document's ID.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn create_doc_with_md(
        &self,
        payload: &CreateDocWithMdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<String>, ClientError> {
        self.call(&filetree::CREATE_DOC_WITH_MD, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_doc(
        &self,
        payload: &GetDocPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Doc>, ClientError> {
        self.call(&filetree::GET_DOC, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_hpath_by_id(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<String>, ClientError> {
        self.call(&filetree::GET_HPATH_BY_ID, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_hpath_by_path(
        &self,
        payload: &NotebookPathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<String>, ClientError> {
        self.call(&filetree::GET_HPATH_BY_PATH, payload, options).await
    }

    /// IDs of documents at a human-readable path; several may share one.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_ids_by_hpath(
        &self,
        payload: &NotebookPathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<String>>, ClientError> {
        self.call(&filetree::GET_IDS_BY_HPATH, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn list_docs_by_path(
        &self,
        payload: &ListDocsByPathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<DocListing>, ClientError> {
        self.call(&filetree::LIST_DOCS_BY_PATH, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn move_docs(
        &self,
        payload: &MoveDocsPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&filetree::MOVE_DOCS, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn remove_doc(
        &self,
        payload: &NotebookPathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&filetree::REMOVE_DOC, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn rename_doc(
        &self,
        payload: &RenameDocPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&filetree::RENAME_DOC, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn search_docs(
        &self,
        payload: &SearchDocsPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<DocSearchItem>>, ClientError> {
        self.call(&filetree::SEARCH_DOCS, payload, options).await
    }
}

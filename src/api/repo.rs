use serde::{Deserialize, Serialize};

use super::block::IdPayload;
use super::endpoints::repo;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDoc {
    pub content: String,
    #[serde(default)]
    pub is_large_doc: bool,
    /// Unix milliseconds.
    #[serde(default)]
    pub updated: i64,
}

impl Client {
    /// Read one document out of a repository snapshot by file ID.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn open_repo_snapshot_doc(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<SnapshotDoc>, ClientError> {
        self.call(&repo::OPEN_REPO_SNAPSHOT_DOC, payload, options).await
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::endpoints::storage;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// Replace the whole local storage object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetLocalStoragePayload {
    /// Originating app instance ID.
    pub app: String,
    pub val: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetLocalStorageValPayload {
    pub app: String,
    pub key: String,
    pub val: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDoc {
    pub root_id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_local_storage(
        &self,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Map<String, Value>>, ClientError> {
        self.call_empty(&storage::GET_LOCAL_STORAGE, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_recent_docs(&self, options: Option<TempOptions>) -> Result<Envelope<Vec<RecentDoc>>, ClientError> {
        self.call_empty(&storage::GET_RECENT_DOCS, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn set_local_storage(
        &self,
        payload: &SetLocalStoragePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&storage::SET_LOCAL_STORAGE, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn set_local_storage_val(
        &self,
        payload: &SetLocalStorageValPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&storage::SET_LOCAL_STORAGE_VAL, payload, options).await
    }
}

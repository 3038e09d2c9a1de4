use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::endpoints::attr;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetBlockAttrsPayload {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetBlockAttrsPayload {
    pub id: String,
    /// `None` removes the attribute.
    pub attrs: BTreeMap<String, Option<String>>,
}

impl Client {
    /// All attributes of a block, custom ones prefixed with `custom-`.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_block_attrs(
        &self,
        payload: &GetBlockAttrsPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<BTreeMap<String, String>>, ClientError> {
        self.call(&attr::GET_BLOCK_ATTRS, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_bookmark_labels(
        &self,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<String>>, ClientError> {
        self.call_empty(&attr::GET_BOOKMARK_LABELS, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn set_block_attrs(
        &self,
        payload: &SetBlockAttrsPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&attr::SET_BLOCK_ATTRS, payload, options).await
    }
}

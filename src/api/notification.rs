use serde::{Deserialize, Serialize};

use super::endpoints::notification;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushMessagePayload {
    pub msg: String,
    /// Display time in milliseconds; the kernel default is 7000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushedMessage {
    pub id: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn push_err_msg(
        &self,
        payload: &PushMessagePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<PushedMessage>, ClientError> {
        self.call(&notification::PUSH_ERR_MSG, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn push_msg(
        &self,
        payload: &PushMessagePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<PushedMessage>, ClientError> {
        self.call(&notification::PUSH_MSG, payload, options).await
    }
}

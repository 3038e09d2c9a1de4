use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::endpoints::system;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootProgress {
    #[serde(default)]
    pub details: String,
    /// Percentage, 0 through 100.
    #[serde(default)]
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExitPayload {
    /// Exit even when a data sync is in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConf {
    pub conf: Map<String, Value>,
    /// Whether the kernel has finished booting.
    #[serde(default)]
    pub start: bool,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn boot_progress(&self, options: Option<TempOptions>) -> Result<Envelope<BootProgress>, ClientError> {
        self.call_empty(&system::BOOT_PROGRESS, options).await
    }

    /// Kernel clock, Unix milliseconds.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn current_time(&self, options: Option<TempOptions>) -> Result<Envelope<i64>, ClientError> {
        self.call_empty(&system::CURRENT_TIME, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn exit(
        &self,
        payload: &ExitPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&system::EXIT, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_conf(&self, options: Option<TempOptions>) -> Result<Envelope<KernelConf>, ClientError> {
        self.call_empty(&system::GET_CONF, options).await
    }

    /// Drop the session cookie.
    ///
    /// The kernel answers with a non-zero code and `{closeTimeout}` in `data`,
    /// so on success this normally surfaces as [`ClientError::Kernel`].
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn logout_auth(&self, options: Option<TempOptions>) -> Result<Envelope<Value>, ClientError> {
        self.call_empty(&system::LOGOUT_AUTH, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn version(&self, options: Option<TempOptions>) -> Result<Envelope<String>, ClientError> {
        self.call_empty(&system::VERSION, options).await
    }
}

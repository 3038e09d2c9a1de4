use serde::{Deserialize, Serialize};

use super::block::IdPayload;
use super::endpoints::inbox;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// A cloud inbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shorthand {
    pub oid: String,
    #[serde(default)]
    pub h_created: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub shorthand_content: String,
    #[serde(default)]
    pub shorthand_desc: String,
    #[serde(default)]
    pub shorthand_format: String,
    #[serde(default)]
    pub shorthand_md: String,
    #[serde(default)]
    pub shorthand_title: String,
    #[serde(default)]
    pub shorthand_url: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_shorthand(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Shorthand>, ClientError> {
        self.call(&inbox::GET_SHORTHAND, payload, options).await
    }
}

use serde::{Deserialize, Serialize};

use super::endpoints::convert;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// Run pandoc inside `temp/convert/pandoc/<dir>` of the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PandocPayload {
    pub dir: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PandocData {
    pub path: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn pandoc(
        &self,
        payload: &PandocPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<PandocData>, ClientError> {
        self.call(&convert::PANDOC, payload, options).await
    }
}

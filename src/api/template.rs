use serde::{Deserialize, Serialize};

use super::endpoints::template;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// Render a template file in the context of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPayload {
    /// Document ID supplying the render context.
    pub id: String,
    /// Absolute path of the template file on the kernel host.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    pub content: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderSprigPayload {
    pub template: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn render(
        &self,
        payload: &RenderPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<RenderedTemplate>, ClientError> {
        self.call(&template::RENDER, payload, options).await
    }

    /// Render a Sprig template string.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn render_sprig(
        &self,
        payload: &RenderSprigPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<String>, ClientError> {
        self.call(&template::RENDER_SPRIG, payload, options).await
    }
}

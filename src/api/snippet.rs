use serde::{Deserialize, Serialize};

use super::endpoints::snippet;
use super::types::Snippet;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

/// Which snippets to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetFilter {
    #[default]
    All,
    Css,
    Js,
}

/// Enabled-state filter: `0` disabled only, `1` enabled only, `2` both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum SnippetEnabled {
    Disabled,
    Enabled,
    Any,
}

impl From<SnippetEnabled> for u8 {
    fn from(value: SnippetEnabled) -> Self {
        match value {
            SnippetEnabled::Disabled => 0,
            SnippetEnabled::Enabled => 1,
            SnippetEnabled::Any => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetSnippetPayload {
    #[serde(rename = "type")]
    pub kind: SnippetFilter,
    pub enabled: SnippetEnabled,
}

impl Default for GetSnippetPayload {
    fn default() -> Self {
        Self { kind: SnippetFilter::All, enabled: SnippetEnabled::Any }
    }
}

/// Both the listing result and the replacement payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippets {
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_snippet(
        &self,
        payload: &GetSnippetPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Snippets>, ClientError> {
        self.call(&snippet::GET_SNIPPET, payload, options).await
    }

    /// Replace the full snippet list.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn set_snippet(
        &self,
        payload: &Snippets,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Snippets>, ClientError> {
        self.call(&snippet::SET_SNIPPET, payload, options).await
    }
}

use serde::{Deserialize, Serialize};

use super::block::IdPayload;
use super::endpoints::export;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdContent {
    pub h_path: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportResourcesPayload {
    /// Workspace-relative files and directories to pack.
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPath {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportHtmlPayload {
    pub id: String,
    pub pdf: bool,
    pub save_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedHtml {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn export_md_content(
        &self,
        payload: &IdPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<MdContent>, ClientError> {
        self.call(&export::EXPORT_MD_CONTENT, payload, options).await
    }

    /// Pack files into a zip under `temp/export`.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn export_resources(
        &self,
        payload: &ExportResourcesPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<ExportPath>, ClientError> {
        self.call(&export::EXPORT_RESOURCES, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn export_html(
        &self,
        payload: &ExportHtmlPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<ExportedHtml>, ClientError> {
        self.call(&export::EXPORT_HTML, payload, options).await
    }
}

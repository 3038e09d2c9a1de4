use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::endpoints::asset;
use crate::client::{Client, RequestDescriptor};
use crate::engine::FormData;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

pub const DEFAULT_ASSETS_DIR: &str = "/assets/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Bytes,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPayload {
    /// Workspace directory to store into; `/assets/` when unset.
    pub assets_dir_path: Option<String>,
    pub files: Vec<UploadFile>,
}

impl UploadPayload {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        let mut form = FormData::new();
        form.append_text("assetsDirPath", self.assets_dir_path.as_deref().unwrap_or(DEFAULT_ASSETS_DIR));
        for file in &self.files {
            form.append_file("file[]", file.name.clone(), file.bytes.clone(), file.mime.clone());
        }
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    #[serde(default)]
    pub err_files: Vec<String>,
    /// Original file name to stored asset path.
    #[serde(default)]
    pub succ_map: BTreeMap<String, String>,
}

impl Client {
    /// Upload asset files as multipart form data.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn upload(
        &self,
        payload: &UploadPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<UploadData>, ClientError> {
        let request = RequestDescriptor::endpoint(&asset::UPLOAD)
            .payload(payload.to_form())
            .options(options);
        self.dispatch(request).await?.into_envelope()?.into_typed()
    }
}

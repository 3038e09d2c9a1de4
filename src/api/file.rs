use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::file;
use crate::client::{Client, RequestDescriptor, ResponseData};
use crate::engine::{FormData, ResponseKind};
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathPayload {
    /// Workspace-relative path, e.g. `/data/storage/petal/x.json`.
    pub path: String,
}

impl PathPayload {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// File body for `putFile`. Without a name, the last segment of the target
/// path is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutFileContent {
    pub bytes: Bytes,
    pub name: Option<String>,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutFilePayload {
    pub path: String,
    pub is_dir: bool,
    /// Unix seconds.
    pub mod_time: Option<i64>,
    pub file: Option<PutFileContent>,
}

impl PutFilePayload {
    /// Every field becomes one form part, the file as a file part.
    #[must_use]
    pub fn to_form(&self) -> FormData {
        let mut form = FormData::new();
        form.append_text("path", self.path.clone())
            .append_text("isDir", self.is_dir.to_string());
        if let Some(mod_time) = self.mod_time {
            form.append_text("modTime", mod_time.to_string());
        }
        if let Some(file) = &self.file {
            let name = file
                .name
                .clone()
                .unwrap_or_else(|| self.path.rsplit('/').next().unwrap_or_default().to_owned());
            form.append_file("file", name, file.bytes.clone(), file.mime.clone());
        }
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFilePayload {
    pub path: String,
    pub new_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub is_dir: bool,
    #[serde(default)]
    pub is_symlink: bool,
    pub name: String,
    /// Unix seconds.
    #[serde(default)]
    pub updated: i64,
}

impl Client {
    /// Read a workspace file. The body comes back raw in the requested kind
    /// (`text` by default); a missing file answers 202 with an error envelope
    /// and so surfaces as [`ClientError::Kernel`].
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_file(
        &self,
        payload: &PathPayload,
        kind: Option<ResponseKind>,
        options: Option<TempOptions>,
    ) -> Result<ResponseData, ClientError> {
        let request = RequestDescriptor::endpoint(&file::GET_FILE)
            .payload(serde_json::to_value(payload)?)
            .response_kind(kind.unwrap_or(ResponseKind::Text))
            .raw()
            .options(options);
        self.dispatch(request).await
    }

    /// Write a file or create a directory.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn put_file(
        &self,
        payload: &PutFilePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        let request = RequestDescriptor::endpoint(&file::PUT_FILE)
            .payload(payload.to_form())
            .options(options);
        self.dispatch(request).await?.into_envelope()
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn read_dir(
        &self,
        payload: &PathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<DirEntry>>, ClientError> {
        self.call(&file::READ_DIR, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn remove_file(
        &self,
        payload: &PathPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&file::REMOVE_FILE, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn rename_file(
        &self,
        payload: &RenameFilePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&file::RENAME_FILE, payload, options).await
    }
}

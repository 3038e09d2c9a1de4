use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::endpoints::notebook;
use super::types::{Notebook, NotebookConf};
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotebookPayload {
    pub notebook: String,
}

impl NotebookPayload {
    #[must_use]
    pub fn new(notebook: impl Into<String>) -> Self {
        Self { notebook: notebook.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateNotebookPayload {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameNotebookPayload {
    pub notebook: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetNotebookConfPayload {
    pub notebook: String,
    pub conf: NotebookConf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedNotebook {
    pub notebook: Notebook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookConfData {
    #[serde(rename = "box")]
    pub notebook: String,
    pub conf: NotebookConf,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebooks {
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn close_notebook(
        &self,
        payload: &NotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&notebook::CLOSE_NOTEBOOK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn create_notebook(
        &self,
        payload: &CreateNotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<CreatedNotebook>, ClientError> {
        self.call(&notebook::CREATE_NOTEBOOK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_notebook_conf(
        &self,
        payload: &NotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<NotebookConfData>, ClientError> {
        self.call(&notebook::GET_NOTEBOOK_CONF, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn ls_notebooks(&self, options: Option<TempOptions>) -> Result<Envelope<Notebooks>, ClientError> {
        self.call_empty(&notebook::LS_NOTEBOOKS, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn open_notebook(
        &self,
        payload: &NotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&notebook::OPEN_NOTEBOOK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn remove_notebook(
        &self,
        payload: &NotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&notebook::REMOVE_NOTEBOOK, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn rename_notebook(
        &self,
        payload: &RenameNotebookPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Value>, ClientError> {
        self.call(&notebook::RENAME_NOTEBOOK, payload, options).await
    }

    /// Returns the stored configuration.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn set_notebook_conf(
        &self,
        payload: &SetNotebookConfPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<NotebookConf>, ClientError> {
        self.call(&notebook::SET_NOTEBOOK_CONF, payload, options).await
    }
}

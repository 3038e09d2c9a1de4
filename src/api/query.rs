use serde::Serialize;
use serde_json::{Map, Value};

use super::endpoints::query;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SqlPayload {
    pub stmt: String,
}

impl SqlPayload {
    #[must_use]
    pub fn new(stmt: impl Into<String>) -> Self {
        Self { stmt: stmt.into() }
    }
}

/// One result row, keyed by column.
pub type Row = Map<String, Value>;

impl Client {
    /// Run a read-only SQL query against the block database.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn sql(
        &self,
        payload: &SqlPayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<Vec<Row>>, ClientError> {
        self.call(&query::SQL, payload, options).await
    }
}

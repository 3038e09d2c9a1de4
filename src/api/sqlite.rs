use serde_json::Value;

use super::endpoints::sqlite;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

impl Client {
    /// Wait until queued database writes are committed.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn flush_transaction(&self, options: Option<TempOptions>) -> Result<Envelope<Value>, ClientError> {
        self.call_empty(&sqlite::FLUSH_TRANSACTION, options).await
    }
}

//! Kernel response envelope and its parser.
//!
//! Every JSON answer from the kernel is wrapped as `{code, msg, data}`.
//! `code == 0` is the only success value; anything else becomes a
//! [`KernelError`] carrying the full envelope.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, KernelError, ResponseMeta};

/// The `{code, msg, data}` wire wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: T,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

impl Envelope<Value> {
    /// Decode `data` into a concrete response type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Json`] when `data` does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Envelope<T>, ClientError> {
        let data = serde_json::from_value(self.data)?;
        Ok(Envelope { code: self.code, msg: self.msg, data })
    }
}

/// Anything an envelope can be read out of: a parsed body, raw bytes, or an
/// engine-specific response wrapper.
pub trait EnvelopeSource {
    /// Split into the JSON body and whatever transport metadata is known.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not JSON.
    fn into_body(self) -> Result<(Value, Option<ResponseMeta>), ClientError>;
}

impl EnvelopeSource for Value {
    fn into_body(self) -> Result<(Value, Option<ResponseMeta>), ClientError> {
        Ok((self, None))
    }
}

impl EnvelopeSource for Bytes {
    fn into_body(self) -> Result<(Value, Option<ResponseMeta>), ClientError> {
        Ok((serde_json::from_slice(&self)?, None))
    }
}

impl EnvelopeSource for (Value, ResponseMeta) {
    fn into_body(self) -> Result<(Value, Option<ResponseMeta>), ClientError> {
        Ok((self.0, Some(self.1)))
    }
}

/// Check an already-decoded envelope.
///
/// # Errors
///
/// Returns a [`KernelError`] when `code != 0`.
pub fn check(envelope: Envelope<Value>, response: Option<ResponseMeta>) -> Result<Envelope<Value>, KernelError> {
    if envelope.is_ok() {
        Ok(envelope)
    } else {
        tracing::warn!(code = envelope.code, msg = %envelope.msg, "kernel returned error envelope");
        Err(KernelError::new(envelope, response))
    }
}

/// Read an envelope out of any supported source and check its code.
///
/// # Errors
///
/// Returns [`ClientError::Kernel`] for a non-zero code and
/// [`ClientError::UnexpectedResponse`] when the body is not an envelope.
pub fn parse<S: EnvelopeSource>(source: S) -> Result<Envelope<Value>, ClientError> {
    let (body, response) = source.into_body()?;
    let envelope = serde_json::from_value::<Envelope<Value>>(body)
        .map_err(|e| ClientError::UnexpectedResponse(format!("body is not a kernel envelope: {e}")))?;
    Ok(check(envelope, response)?)
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

//! Typed kernel API.
//!
//! One module per endpoint group. Each adds its methods to [`Client`] as an
//! `impl` block: JSON payload in, [`Envelope`] of a typed record out, with an
//! optional per-call [`TempOptions`] last. Endpoints that take no payload
//! send none at all.
//!
//! `getFile`, `upload` and `putFile` are the exceptions: the first returns
//! raw [`ResponseData`] in a caller-chosen kind, the other two send
//! multipart forms.
//!
//! [`Client`]: crate::client::Client
//! [`Envelope`]: crate::envelope::Envelope
//! [`TempOptions`]: crate::normalize::TempOptions
//! [`ResponseData`]: crate::client::ResponseData

pub mod asset;
pub mod attr;
pub mod block;
pub mod broadcast;
pub mod convert;
pub mod endpoints;
pub mod export;
pub mod file;
pub mod filetree;
pub mod history;
pub mod inbox;
pub mod network;
pub mod notebook;
pub mod notification;
pub mod outline;
pub mod query;
pub mod repo;
pub mod search;
pub mod snippet;
pub mod sqlite;
pub mod storage;
pub mod system;
pub mod template;
pub mod types;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

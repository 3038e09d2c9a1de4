//! # siyuan-client
//!
//! Typed client for the SiYuan kernel: its HTTP API and its broadcast
//! WebSocket channel.
//!
//! Every typed method in [`api`] funnels into [`Client::dispatch`], which
//! carries the request over one of two HTTP engines ([`engine::fetch`] or
//! [`engine::xhr`]) and reads the kernel's `{code, msg, data}` envelope back
//! out of whatever the engine returned. [`Client::fetch`] offers a
//! fetch-style call performed server-side by the kernel's forward proxy, and
//! [`Client::broadcast`] opens the broadcast channel.
//!
//! ```no_run
//! # async fn run() -> Result<(), siyuan_client::ClientError> {
//! let client = siyuan_client::Client::from_env()?;
//! let version = client.version(None).await?.data;
//! println!("kernel {version}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod broadcast;
pub mod client;
pub mod config;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod proxy;

#[cfg(test)]
pub mod test_helpers;

pub use broadcast::{BroadcastParams, BroadcastStream, build_channel_url};
pub use client::{Client, RequestDescriptor, ResponseData};
pub use config::{EngineKind, KernelConfig};
pub use engine::{Blob, FormData, Payload, ResponseKind};
pub use envelope::Envelope;
pub use error::{ClientError, HttpError, KernelError, ResponseMeta};
pub use normalize::{BaseOptions, FetchOptions, Options, TempOptions, XhrOptions};
pub use proxy::{ProxyRequest, ProxyResponse, RequestInit, RequestInput};
pub use reqwest::{Method, StatusCode, Url};

//! Client configuration parsed from environment variables.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ClientError;

/// Local origin the kernel listens on out of the box.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6806";
/// Development token: empty, meaning no credential is sent.
pub const DEFAULT_TOKEN: &str = "";
/// Request timeout for the XHR engine and for forward-proxied calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Which HTTP engine a call goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// Promise-style engine with immutable, re-created instances.
    Fetch,
    /// XHR-style engine with persistent, mutable defaults.
    #[default]
    Xhr,
}

impl EngineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Xhr => "xhr",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "fetch" => Ok(Self::Fetch),
            "xhr" => Ok(Self::Xhr),
            other => Err(ClientError::ConfigParse(format!(
                "unknown client type '{other}' (expected 'fetch' or 'xhr')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    pub engine: EngineKind,
    pub base_url: String,
    pub token: String,
    pub timeouts: Timeouts,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: DEFAULT_TOKEN.to_owned(),
            timeouts: Timeouts::default(),
        }
    }
}

impl KernelConfig {
    /// Build typed kernel config from environment variables.
    ///
    /// Optional:
    /// - `SIYUAN_BASE_URL`: default `http://localhost:6806`
    /// - `SIYUAN_TOKEN`: default empty (no `Authorization` header)
    /// - `SIYUAN_CLIENT_TYPE`: `xhr` (default) or `fetch`
    /// - `SIYUAN_REQUEST_TIMEOUT_SECS`: default 60
    /// - `SIYUAN_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigParse`] for an unknown client type.
    pub fn from_env() -> Result<Self, ClientError> {
        let engine = match std::env::var("SIYUAN_CLIENT_TYPE") {
            Ok(raw) if !raw.is_empty() => raw.parse()?,
            _ => EngineKind::default(),
        };
        let base_url = std::env::var("SIYUAN_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let token = std::env::var("SIYUAN_TOKEN").unwrap_or_else(|_| DEFAULT_TOKEN.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("SIYUAN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SIYUAN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { engine, base_url, token, timeouts })
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.request_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.connect_secs)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

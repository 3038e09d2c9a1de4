use serde::{Deserialize, Serialize};

use super::endpoints::broadcast;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::normalize::TempOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    /// Connected subscribers.
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelNamePayload {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostMessagePayload {
    pub channel: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelData {
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsData {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Client {
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_channel_info(
        &self,
        payload: &ChannelNamePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<ChannelData>, ClientError> {
        self.call(&broadcast::GET_CHANNEL_INFO, payload, options).await
    }

    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn get_channels(&self, options: Option<TempOptions>) -> Result<Envelope<ChannelsData>, ClientError> {
        self.call_empty(&broadcast::GET_CHANNELS, options).await
    }

    /// Publish a text message to every subscriber of a channel.
    ///
    /// # Errors
    ///
    /// As [`Client::dispatch`].
    pub async fn post_message(
        &self,
        payload: &PostMessagePayload,
        options: Option<TempOptions>,
    ) -> Result<Envelope<ChannelData>, ClientError> {
        self.call(&broadcast::POST_MESSAGE, payload, options).await
    }
}

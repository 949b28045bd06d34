//! Slack API client module
//!
//! Wraps the slack-morphism hyper client for the three Web API methods the
//! cleaner calls: `conversations.open`, `conversations.history` and `chat.delete`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{
    SlackApiChatDeleteRequest, SlackApiConversationsHistoryRequest,
    SlackApiConversationsOpenRequest,
};
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackTs, SlackUserId};
use tracing::debug;

use super::conversations::{ConversationApi, HistoryPage};
use crate::errors::CleanerError;

/// Slack API client bound to a single bot token
pub struct SlackClient {
    client: SlackHyperClient,
    token: SlackApiToken,
}

impl SlackClient {
    /// # Errors
    ///
    /// Returns `CleanerError::Platform` if the HTTPS connector can't be built.
    pub fn new(token: &Secret<String>) -> Result<Self, CleanerError> {
        let connector = SlackClientHyperConnector::new().map_err(|e| {
            CleanerError::Platform(format!("Failed to create Slack HTTP connector: {e}"))
        })?;

        Ok(Self {
            client: SlackHyperClient::new(connector),
            token: SlackApiToken::new(SlackApiTokenValue::new(token.expose_secret().clone())),
        })
    }
}

#[async_trait]
impl ConversationApi for SlackClient {
    async fn open_direct_message(&self, user_id: &str) -> Result<String, CleanerError> {
        let session = self.client.open_session(&self.token);
        let open_req = SlackApiConversationsOpenRequest::new()
            .with_users(vec![SlackUserId(user_id.to_string())]);

        let result = session.conversations_open(&open_req).await?;
        let channel_id = result.channel.id.0;
        debug!(user_id, channel_id = %channel_id, "opened DM channel");
        Ok(channel_id)
    }

    async fn conversation_history(&self, channel_id: &str) -> Result<HistoryPage, CleanerError> {
        let session = self.client.open_session(&self.token);
        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel_id.to_string()));

        let result = session.conversations_history(&request).await?;

        Ok(HistoryPage {
            message_ts: result
                .messages
                .into_iter()
                .map(|m| m.origin.ts.0)
                .collect(),
            has_more: result.has_more.unwrap_or(false),
        })
    }

    async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<(), CleanerError> {
        let session = self.client.open_session(&self.token);
        let delete_req = SlackApiChatDeleteRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackTs(ts.to_string()),
        );

        session.chat_delete(&delete_req).await?;
        Ok(())
    }
}

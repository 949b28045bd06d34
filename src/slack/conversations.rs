//! The three Slack capabilities the cleaner needs, behind a trait so the
//! resolve and purge loops can run against a scripted fake in tests.

use async_trait::async_trait;

use crate::errors::CleanerError;

/// One page of `conversations.history`, reduced to what deletion needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPage {
    /// Message timestamps in the order Slack returned them (newest first).
    pub message_ts: Vec<String>,
    pub has_more: bool,
}

impl HistoryPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message_ts.is_empty()
    }
}

#[async_trait]
pub trait ConversationApi: Send + Sync {
    /// Open (or reuse) the DM channel with `user_id` and return its channel id.
    async fn open_direct_message(&self, user_id: &str) -> Result<String, CleanerError>;

    /// Fetch the most recent page of history for `channel_id`.
    async fn conversation_history(&self, channel_id: &str) -> Result<HistoryPage, CleanerError>;

    /// Delete the message identified by `ts`. Throttling surfaces as `CleanerError::RateLimited`.
    async fn delete_message(&self, channel_id: &str, ts: &str) -> Result<(), CleanerError>;
}

//! All Slack-specific functionality

pub mod client;
pub mod conversations;

// Re-export main types for convenience
pub use client::SlackClient;
pub use conversations::{ConversationApi, HistoryPage};

//! The cleaning workflow: resolve targets, then purge each conversation in turn.

pub mod handler;
pub mod purge;
pub mod resolve;

pub use handler::{CleanSummary, clean_conversations, start};
pub use purge::{PurgeReport, RATE_LIMIT_BACKOFF, delete_history};
pub use resolve::resolve_conversations;

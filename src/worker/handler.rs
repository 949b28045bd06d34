use std::fmt;
use std::path::Path;

use tracing::info;

use super::purge::delete_history;
use super::resolve::resolve_conversations;
use crate::core::config::{Settings, load_config};
use crate::errors::CleanerError;
use crate::slack::{ConversationApi, SlackClient};

/// Totals across every conversation in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub conversations: usize,
    pub deleted: usize,
    pub dropped: usize,
}

impl fmt::Display for CleanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deleted {} message(s) across {} conversation(s), {} dropped to rate limiting",
            self.deleted, self.conversations, self.dropped
        )
    }
}

/// Entry point for a run: load `path`, connect to Slack, purge every target.
///
/// # Errors
///
/// Returns the first error from loading, resolving or purging.
pub async fn start(path: &Path) -> Result<CleanSummary, CleanerError> {
    let settings = load_config(path)?;
    let client = SlackClient::new(&settings.api_token)?;
    clean_conversations(&client, &settings).await
}

/// Resolve the targets in `settings` and purge them one after another.
///
/// # Errors
///
/// Stops at the first failure; later conversations are left untouched.
pub async fn clean_conversations<A>(
    api: &A,
    settings: &Settings,
) -> Result<CleanSummary, CleanerError>
where
    A: ConversationApi + ?Sized,
{
    let channels = resolve_conversations(api, settings).await?;
    info!("Cleaning {} conversation(s)", channels.len());

    let mut summary = CleanSummary::default();
    for channel_id in &channels {
        let report = delete_history(api, channel_id).await?;
        summary.conversations += 1;
        summary.deleted += report.deleted;
        summary.dropped += report.dropped;
    }

    info!(
        conversations = summary.conversations,
        deleted = summary.deleted,
        dropped = summary.dropped,
        "Slack cleaner finished"
    );
    Ok(summary)
}

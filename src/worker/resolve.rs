use tracing::{info, warn};

use crate::core::config::Settings;
use crate::errors::CleanerError;
use crate::slack::ConversationApi;

/// Work out which DM channels to purge.
///
/// When the settings list explicit conversations, nothing is resolved and the
/// result is empty. Only the user list is ever turned into channels.
///
/// # Errors
///
/// The first failed `conversations.open` aborts resolution and is returned as-is.
pub async fn resolve_conversations<A>(
    api: &A,
    settings: &Settings,
) -> Result<Vec<String>, CleanerError>
where
    A: ConversationApi + ?Sized,
{
    if !settings.conversations.is_empty() {
        warn!(
            conversations = settings.conversations.len(),
            "Configured conversation list is not processed; only userid entries are resolved"
        );
        return Ok(Vec::new());
    }

    let mut channels = Vec::with_capacity(settings.user_ids.len());
    for user_id in &settings.user_ids {
        let channel_id = api.open_direct_message(user_id).await?;
        info!("Resolved user {} to DM channel {}", user_id, channel_id);
        channels.push(channel_id);
    }

    Ok(channels)
}

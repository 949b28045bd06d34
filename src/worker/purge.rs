use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::CleanerError;
use crate::slack::{ConversationApi, HistoryPage};

/// How long to back off after Slack rejects a delete for rate limiting.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(30);

/// Counters for one purged conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeReport {
    /// History pages fetched, including the final empty one.
    pub pages: usize,
    pub deleted: usize,
    /// Deletes rejected by rate limiting. These are not retried.
    pub dropped: usize,
}

enum PurgeState {
    Fetching,
    Deleting { page: HistoryPage, next: usize },
    RateLimited { page: HistoryPage, next: usize },
    Done,
}

/// Delete every message in `channel_id`, page by page.
///
/// Each fetch asks for the latest page again; deleting the previous page is
/// what moves the window back through history. A delete rejected for rate
/// limiting is skipped after a [`RATE_LIMIT_BACKOFF`] sleep.
///
/// # Errors
///
/// Any fetch failure, or any delete failure other than rate limiting, ends the
/// purge immediately. Messages already deleted stay deleted.
pub async fn delete_history<A>(api: &A, channel_id: &str) -> Result<PurgeReport, CleanerError>
where
    A: ConversationApi + ?Sized,
{
    let mut report = PurgeReport::default();
    let mut state = PurgeState::Fetching;

    loop {
        state = match state {
            PurgeState::Fetching => {
                let page = api.conversation_history(channel_id).await?;
                report.pages += 1;
                if page.is_empty() {
                    info!("All messages cleared for channel: {}", channel_id);
                    PurgeState::Done
                } else {
                    PurgeState::Deleting { page, next: 0 }
                }
            }
            PurgeState::Deleting { page, next } => {
                let Some(ts) = page.message_ts.get(next).cloned() else {
                    state = if page.has_more {
                        PurgeState::Fetching
                    } else {
                        PurgeState::Done
                    };
                    continue;
                };

                info!(
                    "Deleting message in channel {} with timestamp {}",
                    channel_id, ts
                );
                let outcome = api.delete_message(channel_id, &ts).await;
                match outcome {
                    Ok(()) => {
                        report.deleted += 1;
                        PurgeState::Deleting {
                            page,
                            next: next + 1,
                        }
                    }
                    Err(e) if e.is_rate_limited() => {
                        report.dropped += 1;
                        PurgeState::RateLimited {
                            page,
                            next: next + 1,
                        }
                    }
                    Err(e) => {
                        error!(
                            "Failed to delete message {} in channel {}: {}",
                            ts, channel_id, e
                        );
                        return Err(e);
                    }
                }
            }
            PurgeState::RateLimited { page, next } => {
                warn!(
                    "Slack limit exceeded, sleeping for {} seconds",
                    RATE_LIMIT_BACKOFF.as_secs()
                );
                tokio::time::sleep(RATE_LIMIT_BACKOFF).await;
                PurgeState::Deleting { page, next }
            }
            PurgeState::Done => return Ok(report),
        };
    }
}

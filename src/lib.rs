//! Slack DM cleaner - deletes the direct-message history between a Slack bot
//! and a configured set of users.
//!
//! The run reads a YAML settings file, opens the bot's DM channel with each
//! configured user, then pages through each channel's history deleting every
//! message, sleeping through Slack's rate limits as it goes.
//!
//! # Architecture
//!
//! - `core::config` loads and validates the settings file
//! - `slack` wraps slack-morphism behind the `ConversationApi` trait
//! - `worker` resolves conversations and runs the purge state machine
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     dm_cleaner::setup_logging();
//!
//!     let summary = dm_cleaner::worker::start(Path::new("settings.yml")).await?;
//!     println!("Deleted {} messages", summary.deleted);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

pub use errors::CleanerError;

/// Configure human-readable logging on stderr.
///
/// Verbosity follows `RUST_LOG` and defaults to `info`. Calling this more than
/// once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// dm_cleaner::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

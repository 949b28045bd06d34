use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "slack-dm-cleaner",
    version,
    about = "An easy button to clear DMs when using a slack app"
)]
struct Cli {
    /// The input settings file.
    #[arg(value_name = "SETTINGS")]
    yml_path: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    dm_cleaner::setup_logging();

    match dm_cleaner::worker::start(&cli.yml_path).await {
        Ok(summary) => {
            info!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Starting slack cleaner: {}", e);
            ExitCode::FAILURE
        }
    }
}

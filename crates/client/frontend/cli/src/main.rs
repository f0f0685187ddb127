//! Terminal client entry point.
use anyhow::Result;
use duel_cli::{CliApp, CliConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    CliApp::build(config)?.run().await
}

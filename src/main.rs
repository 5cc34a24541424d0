use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use talentsync_api::{config::ApiConfig, mailer::TracingMailer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Start API server; outgoing mail is logged rather than sent
    talentsync_api::start_server(config, Arc::new(TracingMailer)).await?;

    Ok(())
}

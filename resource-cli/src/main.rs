use std::sync::Arc;

use clap::Parser;
use resource_client::{ApiClient, ClientConfig, LogErrors};

mod cli;
mod logger;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.json_logs)?;

    let config = match cli.api_root.as_deref() {
        Some(root) => {
            let config = ClientConfig::new(root);
            config.validate()?;
            config
        }
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(api_root = %config.api_root, "Using API root");

    let api = ApiClient::connect(&config)?.with_interceptor(Arc::new(LogErrors));
    let output = cli.command.run(&api).await?;

    let rendered = output.render()?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use candidate_scheduler::config::{Command, Config};
use candidate_scheduler::repository::schedule::InMemoryRepository;
use candidate_scheduler::{http, picker};
use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing `.env` file is fine: deployments configure through the environment.
    dotenv::dotenv().ok();

    // Initialize the logger.
    env_logger::init();
    log::set_max_level(LevelFilter::Trace);

    // Parse our configuration from the environment.
    // This will exit with a help message if something is wrong.
    let config = Config::parse();

    match config.command {
        Command::Serve(serve) => {
            http::serve(serve, Arc::new(InMemoryRepository::new())).await?;
        }
        Command::Pick(pick) => picker::run(pick).await?,
    }

    Ok(())
}

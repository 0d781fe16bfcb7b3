// src/main.rs
use anyhow::{Context, Result};
use log::info;
use reqwest::Client;

use bootcamp_daftar::config::Config;
use bootcamp_daftar::flow::RegistrationFlow;
use bootcamp_daftar::services::submit_services::SubmissionService;
use bootcamp_daftar::ui::ConsoleBackend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let config = Config::from_env();
    info!("endpoint pendaftaran: {}", config.endpoint);

    let client = Client::builder()
        .user_agent("bootcamp-daftar/0.1")
        .build()
        .context("failed to build http client")?;

    let service = SubmissionService::new(client, config.endpoint);
    let mut flow = RegistrationFlow::new(service, ConsoleBackend::new());

    flow.run().await
}

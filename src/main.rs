//! Entry point: parse configuration and run the HTTP server.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use f1_stats::{
    api::{self, AppState},
    config::ServerConfig,
    logging::init_logger,
    ErgastClient, StatsService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logger(config.verbose);

    let addr = config.resolve_bind()?;
    let client_config = config.client_config()?;
    let parallelism = config.parallelism();
    info!(
        api_url = %client_config.base_url,
        page_size = client_config.page_size,
        parallelism,
        cache_capacity = client_config.cache_capacity,
        "Starting f1-stats"
    );

    // The blocking HTTP client owns a runtime of its own and has to be
    // created and dropped outside this one.
    let service = tokio::task::spawn_blocking(move || -> f1_stats::Result<StatsService> {
        let client = ErgastClient::new(client_config)?;
        StatsService::from_source(Arc::new(client), parallelism)
    })
    .await
    .context("service setup task failed")??;

    let state = AppState::new(service);
    api::serve(addr, state.clone()).await?;

    tokio::task::spawn_blocking(move || drop(state))
        .await
        .context("service shutdown task failed")?;
    Ok(())
}

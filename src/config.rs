//! Command-line configuration for the server binary.

use clap::Parser;
use std::{net::SocketAddr, time::Duration};

use crate::{
    ergast::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE},
    error::{Result, StatsError},
    API_URL_ENV_VAR, BIND_ENV_VAR,
};

/// Address used when neither `--bind` nor `F1_STATS_BIND` is given.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

pub const DEFAULT_MAX_PARALLEL_FETCHES: usize = 8;

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "f1-stats",
    about = "Formula 1 statistics aggregation server",
    version
)]
pub struct ServerConfig {
    /// Address to listen on (or set `F1_STATS_BIND`).
    #[clap(long, short)]
    pub bind: Option<String>,

    /// Base URL of the Ergast-compatible API (or set `F1_STATS_API_URL`).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Rows requested per upstream page.
    #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Seasons (or rounds) fetched concurrently per report.
    #[clap(long, default_value_t = DEFAULT_MAX_PARALLEL_FETCHES)]
    pub max_parallel_fetches: usize,

    /// Upstream responses kept in memory; 0 disables the cache.
    #[clap(long, default_value_t = 0)]
    pub cache_capacity: usize,

    /// Upstream request timeout in seconds. No timeout when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Enable debug logging.
    #[clap(long, short)]
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: None,
            api_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            max_parallel_fetches: DEFAULT_MAX_PARALLEL_FETCHES,
            cache_capacity: 0,
            timeout_secs: None,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Listen address from the flag, then the environment, then the default.
    pub fn resolve_bind(&self) -> Result<SocketAddr> {
        let raw = self
            .bind
            .clone()
            .or_else(|| std::env::var(BIND_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        raw.parse::<SocketAddr>().map_err(|e| StatsError::Config {
            message: format!("invalid bind address '{}': {}", raw, e),
        })
    }

    pub fn resolve_api_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        if self.page_size == 0 {
            return Err(StatsError::Config {
                message: "page size must be greater than zero".to_string(),
            });
        }

        Ok(ClientConfig {
            base_url: self.resolve_api_url(),
            page_size: self.page_size,
            timeout: self.timeout_secs.map(Duration::from_secs),
            cache_capacity: self.cache_capacity,
        })
    }

    pub fn parallelism(&self) -> usize {
        self.max_parallel_fetches.max(1)
    }
}

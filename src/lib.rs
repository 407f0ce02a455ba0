//! Formula 1 Statistics Library
//!
//! Fetches historical results from an Ergast-compatible API and reshapes them
//! into ranked reports, served over a small HTTP API.
//!
//! ## Features
//!
//! - **Wins and Podiums**: per-driver and per-constructor tallies broken down by season
//! - **Points and Standings**: final standings, champions and round-by-round changes
//! - **Qualifying and Lap Data**: poles, fastest laps, leading laps and lap charts
//! - **Milestones**: hat tricks, grand slams, retirements and grid-to-flag gains
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use f1_stats::{ClientConfig, ErgastClient, OptionsModel, StatsService};
//!
//! # fn example() -> f1_stats::Result<()> {
//! let client = ErgastClient::new(ClientConfig::default())?;
//! let service = StatsService::from_source(Arc::new(client), 8)?;
//!
//! let wins = service.drivers_wins(&OptionsModel::for_range(2010, 2012))?;
//! println!("{} winners", wins.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export F1_STATS_BIND=127.0.0.1:8080
//! export F1_STATS_API_URL=http://ergast.com/api/f1
//! ```

pub mod aggregation;
pub mod api;
pub mod config;
pub mod ergast;
pub mod error;
pub mod logging;
pub mod models;
pub mod options;
pub mod services;

// Re-export commonly used types
pub use aggregation::Aggregator;
pub use ergast::{ClientConfig, ErgastClient, RaceDataSource};
pub use error::{Result, StatsError};
pub use options::{OptionsModel, RaceOptions, Round, Season, YearRange};
pub use services::StatsService;

pub const BIND_ENV_VAR: &str = "F1_STATS_BIND";
pub const API_URL_ENV_VAR: &str = "F1_STATS_API_URL";

//! Report routes. Every report is a POST taking the options as JSON and
//! answering with the report payload as a JSON array.

use axum::{
    extract::State,
    routing::{post, MethodRouter},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::{
    error::{Result, StatsError},
    services::StatsService,
};

/// A service method building one report from its options.
pub type ReportFn<O, T> = fn(&StatsService, &O) -> Result<T>;

/// POST route running `build` with the request body as options.
pub fn report<O, T>(build: ReportFn<O, T>) -> MethodRouter<AppState>
where
    O: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
{
    post(
        move |State(state): State<AppState>, Json(options): Json<O>| async move {
            run_blocking(state.service, options, build).await.map(Json)
        },
    )
}

/// Aggregation issues blocking upstream requests, so it runs off the
/// async workers.
async fn run_blocking<O, T>(service: Arc<StatsService>, options: O, build: ReportFn<O, T>) -> Result<T>
where
    O: Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || build(&service, &options))
        .await
        .map_err(|err| StatsError::Task {
            message: err.to_string(),
        })?
}

pub async fn health_check() -> &'static str {
    "OK"
}

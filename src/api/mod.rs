//! HTTP surface: one POST route per report plus a health probe.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::{error::Result, services::StatsService};
use handlers::{health_check, report};


#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StatsService>,
}

impl AppState {
    pub fn new(service: StatsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/wins", wins_routes())
        .nest("/api/podiums", podiums_routes())
        .nest("/api/points", points_routes())
        .nest("/api/fastest", fastest_routes())
        .nest("/api/poles", poles_routes())
        .nest("/api/leading-laps", leading_laps_routes())
        .nest("/api/misc", misc_routes())
        .with_state(state)
}

fn wins_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_wins))
        .route("/constructors", report(StatsService::constructors_wins))
        .route("/drivers-percent", report(StatsService::drivers_win_percent))
        .route(
            "/constructors-percent",
            report(StatsService::constructors_win_percent),
        )
        .route("/circuits", report(StatsService::circuit_winners))
        .route(
            "/unique-drivers",
            report(StatsService::unique_season_driver_winners),
        )
        .route(
            "/unique-constructors",
            report(StatsService::unique_season_constructor_winners),
        )
        .route("/from-pole", report(StatsService::winners_from_pole))
        .route("/by-grid", report(StatsService::winners_by_grid_position))
}

fn podiums_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_podiums))
        .route("/constructors", report(StatsService::constructors_podiums))
        .route("/same-drivers", report(StatsService::same_drivers_podiums))
        .route(
            "/same-constructors",
            report(StatsService::same_constructors_podiums),
        )
}

fn points_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_points))
        .route("/constructors", report(StatsService::constructors_points))
        .route(
            "/drivers-winners",
            report(StatsService::drivers_champions_points),
        )
        .route(
            "/constructors-winners",
            report(StatsService::constructors_champions_points),
        )
        .route(
            "/drivers-changes",
            report(StatsService::drivers_standings_changes),
        )
        .route(
            "/constructors-changes",
            report(StatsService::constructors_standings_changes),
        )
}

fn fastest_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_fastest_laps))
        .route("/constructors", report(StatsService::constructors_fastest_laps))
        .route(
            "/unique-drivers",
            report(StatsService::unique_drivers_fastest_laps),
        )
        .route(
            "/unique-constructors",
            report(StatsService::unique_constructors_fastest_laps),
        )
}

fn poles_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_poles))
        .route("/constructors", report(StatsService::constructors_poles))
        .route("/unique-drivers", report(StatsService::unique_drivers_poles))
        .route(
            "/unique-constructors",
            report(StatsService::unique_constructors_poles),
        )
}

fn leading_laps_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", report(StatsService::drivers_leading_laps))
        .route("/constructors", report(StatsService::constructors_leading_laps))
}

fn misc_routes() -> Router<AppState> {
    Router::new()
        .route("/race-count", report(StatsService::race_count_per_season))
        .route("/hat-tricks", report(StatsService::hat_tricks))
        .route("/grand-slams", report(StatsService::grand_slams))
        .route("/non-finishers", report(StatsService::non_finishers))
        .route(
            "/position-changes",
            report(StatsService::season_position_changes),
        )
        .route(
            "/constructors-front-rows",
            report(StatsService::constructors_front_rows),
        )
        .route(
            "/drivers-finishing-positions",
            report(StatsService::drivers_finishing_positions),
        )
        .route(
            "/position-changes-during-race",
            report(StatsService::position_changes_during_race),
        )
        .route("/lap-times", report(StatsService::lap_times))
}

/// Bind `addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

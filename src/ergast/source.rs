//! The data-access seam between aggregators and the upstream API.

use super::types::{ConstructorStanding, DriverStanding, Lap, Race};
use crate::{
    error::Result,
    options::{Round, Season},
};

/// Blocking access to per-season and per-round upstream records.
///
/// Implemented by [`super::ErgastClient`] in production and by literal
/// fixtures in tests.
pub trait RaceDataSource: Send + Sync {
    /// Classified results of every race in the season.
    fn race_results(&self, season: Season) -> Result<Vec<Race>>;

    /// Qualifying classifications of every race in the season.
    fn qualifying_results(&self, season: Season) -> Result<Vec<Race>>;

    /// One race per round whose results contain the fastest-lap holder.
    fn fastest_lap_results(&self, season: Season) -> Result<Vec<Race>>;

    /// Number of races on the season calendar.
    fn race_count(&self, season: Season) -> Result<u32>;

    /// Final driver standings, leader first. Empty when unavailable.
    fn driver_standings(&self, season: Season) -> Result<Vec<DriverStanding>>;

    fn constructor_standings(&self, season: Season) -> Result<Vec<ConstructorStanding>>;

    /// Driver standings after `round`, leader first.
    fn driver_standings_after(&self, season: Season, round: Round)
        -> Result<Vec<DriverStanding>>;

    fn constructor_standings_after(
        &self,
        season: Season,
        round: Round,
    ) -> Result<Vec<ConstructorStanding>>;

    /// Classified results of a single race, `None` when the round has none.
    fn round_results(&self, season: Season, round: Round) -> Result<Option<Race>>;

    /// Lap-by-lap timings of one race, laps ascending.
    fn laps(&self, season: Season, round: Round) -> Result<Vec<Lap>>;
}

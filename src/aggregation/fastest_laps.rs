//! Fastest laps by driver and constructor.

use super::{distinct_in_order, group_by_name_and_year, Aggregator};
use crate::{
    ergast::{
        names::{constructor_name, driver_name},
        types::RaceResult,
    },
    error::Result,
    models::{FastestLapModel, FastestLapsByYearModel, UniqueSeasonFastestLapModel},
    options::YearRange,
};


impl Aggregator {
    pub fn drivers_fastest_laps(&self, range: &YearRange) -> Result<Vec<FastestLapModel>> {
        self.fastest_laps_by(range, |r| driver_name(&r.driver))
    }

    pub fn constructors_fastest_laps(&self, range: &YearRange) -> Result<Vec<FastestLapModel>> {
        self.fastest_laps_by(range, |r| constructor_name(&r.constructor))
    }

    fn fastest_laps_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<FastestLapModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().fastest_lap_results(season)?;
            Ok(races
                .iter()
                .filter_map(|race| {
                    race.fastest_lap_holder()
                        .map(|holder| (key(holder), race.circuit_name().to_string()))
                })
                .collect::<Vec<_>>())
        })?;

        Ok(group_by_name_and_year(per_season)
            .into_iter()
            .map(|(name, years)| {
                let by_year = years
                    .into_iter()
                    .map(|(year, circuits)| FastestLapsByYearModel::new(year, circuits))
                    .collect();
                FastestLapModel::new(name, by_year)
            })
            .collect())
    }

    pub fn unique_drivers_fastest_laps(
        &self,
        range: &YearRange,
    ) -> Result<Vec<UniqueSeasonFastestLapModel>> {
        self.unique_fastest_laps_by(range, |r| driver_name(&r.driver))
    }

    pub fn unique_constructors_fastest_laps(
        &self,
        range: &YearRange,
    ) -> Result<Vec<UniqueSeasonFastestLapModel>> {
        self.unique_fastest_laps_by(range, |r| constructor_name(&r.constructor))
    }

    fn unique_fastest_laps_by<K>(
        &self,
        range: &YearRange,
        key: K,
    ) -> Result<Vec<UniqueSeasonFastestLapModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().fastest_lap_results(season)?;
            let achievers =
                distinct_in_order(races.iter().filter_map(|r| r.fastest_lap_holder()).map(&key));
            Ok(UniqueSeasonFastestLapModel::new(season.as_u16(), achievers))
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }
}

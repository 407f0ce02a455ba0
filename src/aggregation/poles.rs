//! Pole positions from qualifying classifications.

use super::{distinct_in_order, group_by_name_and_year, Aggregator};
use crate::{
    ergast::{
        names::{constructor_name, driver_name},
        types::QualifyingResult,
    },
    error::Result,
    models::{PolesByYearModel, PolesModel, UniqueSeasonPoleCountModel},
    options::YearRange,
};

#[cfg(test)]
mod tests;

impl Aggregator {
    pub fn drivers_poles(&self, range: &YearRange) -> Result<Vec<PolesModel>> {
        self.poles_by(range, |q| driver_name(&q.driver))
    }

    pub fn constructors_poles(&self, range: &YearRange) -> Result<Vec<PolesModel>> {
        self.poles_by(range, |q| constructor_name(&q.constructor))
    }

    fn poles_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<PolesModel>>
    where
        K: Fn(&QualifyingResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let sessions = self.source().qualifying_results(season)?;
            Ok(sessions
                .iter()
                .filter_map(|session| {
                    session
                        .pole_sitter()
                        .map(|pole| (key(pole), session.circuit_name().to_string()))
                })
                .collect::<Vec<_>>())
        })?;

        Ok(group_by_name_and_year(per_season)
            .into_iter()
            .map(|(name, years)| {
                let by_year = years
                    .into_iter()
                    .map(|(year, circuits)| PolesByYearModel::new(year, circuits))
                    .collect();
                PolesModel::new(name, by_year)
            })
            .collect())
    }

    pub fn unique_drivers_poles(&self, range: &YearRange) -> Result<Vec<UniqueSeasonPoleCountModel>> {
        self.unique_poles_by(range, |q| driver_name(&q.driver))
    }

    pub fn unique_constructors_poles(
        &self,
        range: &YearRange,
    ) -> Result<Vec<UniqueSeasonPoleCountModel>> {
        self.unique_poles_by(range, |q| constructor_name(&q.constructor))
    }

    fn unique_poles_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<UniqueSeasonPoleCountModel>>
    where
        K: Fn(&QualifyingResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let sessions = self.source().qualifying_results(season)?;
            let sitters =
                distinct_in_order(sessions.iter().filter_map(|s| s.pole_sitter()).map(&key));
            Ok(UniqueSeasonPoleCountModel::new(season.as_u16(), sitters))
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }
}

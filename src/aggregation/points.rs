//! Championship standings: final points, champions and round-by-round changes.

use std::collections::HashMap;

use super::Aggregator;
use crate::{
    ergast::names::{constructor_name, driver_name},
    error::Result,
    models::{
        PointsModel, RoundModel, SeasonPointsModel, SeasonStandingsChangesModel,
        SeasonWinnersPointsModel, StandingModel,
    },
    options::{Round, Season, YearRange},
};


impl Aggregator {
    pub fn drivers_points(&self, range: &YearRange) -> Result<Vec<SeasonPointsModel>> {
        self.season_points_by(range, |season| {
            Ok(self
                .source()
                .driver_standings(season)?
                .iter()
                .map(|s| (driver_name(&s.driver), s.points))
                .collect())
        })
    }

    pub fn constructors_points(&self, range: &YearRange) -> Result<Vec<SeasonPointsModel>> {
        self.season_points_by(range, |season| {
            Ok(self
                .source()
                .constructor_standings(season)?
                .iter()
                .map(|s| (constructor_name(&s.constructor), s.points))
                .collect())
        })
    }

    fn season_points_by<F>(&self, range: &YearRange, standings: F) -> Result<Vec<SeasonPointsModel>>
    where
        F: Fn(Season) -> Result<Vec<(String, f64)>> + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let scored = standings(season)?
                .into_iter()
                .map(|(name, points)| PointsModel { name, points })
                .collect();
            Ok(SeasonPointsModel::new(season.as_u16(), scored))
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }

    /// Champion of every season that has standings.
    pub fn drivers_champions_points(
        &self,
        range: &YearRange,
    ) -> Result<Vec<SeasonWinnersPointsModel>> {
        self.champions_by(range, |season| {
            Ok(self
                .source()
                .driver_standings(season)?
                .first()
                .map(|s| (driver_name(&s.driver), s.points)))
        })
    }

    pub fn constructors_champions_points(
        &self,
        range: &YearRange,
    ) -> Result<Vec<SeasonWinnersPointsModel>> {
        self.champions_by(range, |season| {
            Ok(self
                .source()
                .constructor_standings(season)?
                .first()
                .map(|s| (constructor_name(&s.constructor), s.points)))
        })
    }

    fn champions_by<F>(&self, range: &YearRange, leader: F) -> Result<Vec<SeasonWinnersPointsModel>>
    where
        F: Fn(Season) -> Result<Option<(String, f64)>> + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let Some((winner, points)) = leader(season)? else {
                return Ok(None);
            };
            let races_count = self.source().race_results(season)?.len() as u32;

            Ok(Some(SeasonWinnersPointsModel {
                year: season.as_u16(),
                winner,
                points,
                races_count,
            }))
        })?;

        Ok(per_season.into_iter().filter_map(|(_, model)| model).collect())
    }

    pub fn drivers_standings_changes(
        &self,
        range: &YearRange,
    ) -> Result<Vec<SeasonStandingsChangesModel>> {
        self.standings_changes_by(range, |season, round| {
            Ok(self
                .source()
                .driver_standings_after(season, round)?
                .iter()
                .map(|s| (driver_name(&s.driver), s.points))
                .collect())
        })
    }

    pub fn constructors_standings_changes(
        &self,
        range: &YearRange,
    ) -> Result<Vec<SeasonStandingsChangesModel>> {
        self.standings_changes_by(range, |season, round| {
            Ok(self
                .source()
                .constructor_standings_after(season, round)?
                .iter()
                .map(|s| (constructor_name(&s.constructor), s.points))
                .collect())
        })
    }

    /// Standings after each completed round, fanned out per round.
    fn standings_changes_by<F>(
        &self,
        range: &YearRange,
        standings_after: F,
    ) -> Result<Vec<SeasonStandingsChangesModel>>
    where
        F: Fn(Season, Round) -> Result<Vec<(String, f64)>> + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let rounds: Vec<(Round, String)> = self
                .source()
                .race_results(season)?
                .into_iter()
                .map(|race| (race.round, race.race_name))
                .collect();

            let per_round = self.fan_out(rounds, |(round, round_name)| {
                standings_after(season, round).map(|table| (round, round_name, table))
            })?;

            let mut standings: Vec<StandingModel> = Vec::new();
            let mut index: HashMap<String, usize> = HashMap::new();

            for (round, round_name, table) in per_round {
                for (i, (name, points)) in table.into_iter().enumerate() {
                    let slot = *index.entry(name.clone()).or_insert_with(|| {
                        standings.push(StandingModel {
                            name,
                            rounds: Vec::new(),
                        });
                        standings.len() - 1
                    });
                    standings[slot].rounds.push(RoundModel {
                        round: round.as_u32(),
                        round_name: round_name.clone(),
                        points,
                        position: i as u32 + 1,
                    });
                }
            }

            Ok(SeasonStandingsChangesModel {
                year: season.as_u16(),
                standings,
            })
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }
}

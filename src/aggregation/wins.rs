//! Race wins grouped by driver, constructor, circuit and grid slot.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{distinct_in_order, group_by_name_and_year, Aggregator};
use crate::{
    ergast::{
        names::{constructor_name, driver_name, gap_to_winner},
        types::RaceResult,
    },
    error::Result,
    models::{
        AverageWinsModel, CircuitWinsModel, UniqueSeasonWinnersModel, WinByGridInformationModel,
        WinInformationModel, WinnersFromPoleModel, WinsAndParticipationsModel,
        WinsByGridPositionModel, WinsByYearModel, WinsModel,
    },
    options::YearRange,
};


impl Aggregator {
    pub fn drivers_wins(&self, range: &YearRange) -> Result<Vec<WinsModel>> {
        self.wins_by(range, |r| driver_name(&r.driver))
    }

    pub fn constructors_wins(&self, range: &YearRange) -> Result<Vec<WinsModel>> {
        self.wins_by(range, |r| constructor_name(&r.constructor))
    }

    fn wins_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<WinsModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .filter_map(|race| {
                    let winner = race.winner()?;
                    let gap = gap_to_winner(
                        race.runner_up()
                            .and_then(|r| r.time.as_ref())
                            .map(|t| t.time.as_str()),
                    );
                    Some((
                        key(winner),
                        WinInformationModel {
                            circuit_name: race.circuit_name().to_string(),
                            gap_to_second: gap,
                            grid_position: winner.grid,
                        },
                    ))
                })
                .collect::<Vec<_>>())
        })?;

        Ok(group_by_name_and_year(per_season)
            .into_iter()
            .map(|(name, years)| {
                let by_year = years
                    .into_iter()
                    .map(|(year, wins)| WinsByYearModel::new(year, wins))
                    .collect();
                WinsModel::new(name, by_year)
            })
            .collect())
    }

    /// Wins over classified starts; every result row is one participation.
    pub fn drivers_win_percent(&self, range: &YearRange) -> Result<Vec<AverageWinsModel>> {
        let per_season = self.per_season(range, |season| {
            let mut tally: HashMap<String, (u32, u32)> = HashMap::new();
            for race in self.source().race_results(season)? {
                for result in &race.results {
                    tally.entry(driver_name(&result.driver)).or_default().1 += 1;
                }
                if let Some(winner) = race.winner() {
                    tally.entry(driver_name(&winner.driver)).or_default().0 += 1;
                }
            }
            Ok(tally)
        })?;

        Ok(merge_win_tallies(per_season.into_iter().map(|(_, t)| t)))
    }

    /// Like [`Self::drivers_win_percent`], but a constructor running several
    /// cars participates once per race.
    pub fn constructors_win_percent(&self, range: &YearRange) -> Result<Vec<AverageWinsModel>> {
        let per_season = self.per_season(range, |season| {
            let mut tally: HashMap<String, (u32, u32)> = HashMap::new();
            for race in self.source().race_results(season)? {
                let entered: HashSet<String> = race
                    .results
                    .iter()
                    .map(|r| constructor_name(&r.constructor))
                    .collect();
                for name in entered {
                    tally.entry(name).or_default().1 += 1;
                }
                if let Some(winner) = race.winner() {
                    tally
                        .entry(constructor_name(&winner.constructor))
                        .or_default()
                        .0 += 1;
                }
            }
            Ok(tally)
        })?;

        Ok(merge_win_tallies(per_season.into_iter().map(|(_, t)| t)))
    }

    /// Every driver who raced at each circuit with their wins and starts there.
    pub fn circuit_winners(&self, range: &YearRange) -> Result<Vec<CircuitWinsModel>> {
        let per_season = self.per_season(range, |season| {
            let mut circuits: HashMap<String, HashMap<String, (u32, u32)>> = HashMap::new();
            for race in self.source().race_results(season)? {
                let drivers = circuits.entry(race.circuit_name().to_string()).or_default();
                for result in &race.results {
                    drivers.entry(driver_name(&result.driver)).or_default().1 += 1;
                }
                if let Some(winner) = race.winner() {
                    drivers.entry(driver_name(&winner.driver)).or_default().0 += 1;
                }
            }
            Ok(circuits)
        })?;

        let mut merged: BTreeMap<String, BTreeMap<String, (u32, u32)>> = BTreeMap::new();
        for (_, circuits) in per_season {
            for (circuit, drivers) in circuits {
                let entry = merged.entry(circuit).or_default();
                for (name, (wins, starts)) in drivers {
                    let counts = entry.entry(name).or_default();
                    counts.0 += wins;
                    counts.1 += starts;
                }
            }
        }

        Ok(merged
            .into_iter()
            .map(|(name, drivers)| CircuitWinsModel {
                name,
                winners: drivers
                    .into_iter()
                    .map(|(name, (win_count, participations_count))| WinsAndParticipationsModel {
                        name,
                        win_count,
                        participations_count,
                    })
                    .collect(),
            })
            .collect())
    }

    pub fn unique_season_driver_winners(
        &self,
        range: &YearRange,
    ) -> Result<Vec<UniqueSeasonWinnersModel>> {
        self.unique_season_winners_by(range, |r| driver_name(&r.driver))
    }

    pub fn unique_season_constructor_winners(
        &self,
        range: &YearRange,
    ) -> Result<Vec<UniqueSeasonWinnersModel>> {
        self.unique_season_winners_by(range, |r| constructor_name(&r.constructor))
    }

    fn unique_season_winners_by<K>(
        &self,
        range: &YearRange,
        key: K,
    ) -> Result<Vec<UniqueSeasonWinnersModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            let winners = distinct_in_order(races.iter().filter_map(|r| r.winner()).map(&key));
            Ok(UniqueSeasonWinnersModel::new(
                season.as_u16(),
                winners,
                races.len() as u32,
            ))
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }

    pub fn winners_from_pole(&self, range: &YearRange) -> Result<Vec<WinnersFromPoleModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            let from_pole = races
                .iter()
                .filter_map(|race| race.winner())
                .filter(|winner| winner.grid == 1)
                .map(|winner| driver_name(&winner.driver))
                .collect();
            Ok(WinnersFromPoleModel::new(
                season.as_u16(),
                races.len() as u32,
                from_pole,
            ))
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }

    pub fn winners_by_grid_position(
        &self,
        range: &YearRange,
    ) -> Result<Vec<WinsByGridPositionModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .filter_map(|race| {
                    let winner = race.winner()?;
                    Some((
                        winner.grid,
                        WinByGridInformationModel {
                            winner_name: driver_name(&winner.driver),
                            circuit_name: race.circuit_name().to_string(),
                        },
                    ))
                })
                .collect::<Vec<_>>())
        })?;

        let mut by_grid: BTreeMap<u32, Vec<WinByGridInformationModel>> = BTreeMap::new();
        for (grid, info) in per_season.into_iter().flat_map(|(_, wins)| wins) {
            by_grid.entry(grid).or_default().push(info);
        }

        Ok(by_grid
            .into_iter()
            .map(|(grid, wins)| WinsByGridPositionModel::new(grid, wins))
            .collect())
    }
}

fn merge_win_tallies<I>(tallies: I) -> Vec<AverageWinsModel>
where
    I: IntoIterator<Item = HashMap<String, (u32, u32)>>,
{
    let mut merged: BTreeMap<String, (u32, u32)> = BTreeMap::new();
    for tally in tallies {
        for (name, (wins, starts)) in tally {
            let counts = merged.entry(name).or_default();
            counts.0 += wins;
            counts.1 += starts;
        }
    }

    merged
        .into_iter()
        .map(|(name, (wins, starts))| AverageWinsModel::new(name, wins, starts))
        .collect()
}

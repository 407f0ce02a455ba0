//! Race counts, hat tricks, reliability, grid-to-flag and single-race lap reports.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::{group_by_name_and_year, is_finished, Aggregator, RaceEntrants};
use crate::{
    ergast::{
        names::{constructor_name, driver_name, parse_duration_secs},
        types::{Lap, Race},
    },
    error::{Result, StatsError},
    models::{
        DidNotFinishByYearModel, DidNotFinishInformationModel, DidNotFinishModel,
        DriverFinishingPositionsModel, DriverPositionChangeInformationModel,
        DriverPositionChangeModel, FinishingPositionInformationModel, FinishingPositionModel,
        FrontRowInformationModel, FrontRowModel, GrandSlamModel, HatTrickModel,
        LapPositionModel, LapTimesModel, RacePositionChangesModel, SeasonPositionChangesModel,
        SeasonRacesModel,
    },
    options::{Round, Season, YearRange},
};

#[cfg(test)]
mod tests;

/// A race where one driver took pole, the win and the fastest lap.
struct HatTrick {
    round: Round,
    driver_id: String,
    name: String,
}

impl Aggregator {
    /// Calendar size of every season in the range, zero included.
    pub fn race_count_per_season(&self, range: &YearRange) -> Result<Vec<SeasonRacesModel>> {
        let per_season = self.per_season(range, |season| self.source().race_count(season))?;

        Ok(per_season
            .into_iter()
            .map(|(season, race_count)| SeasonRacesModel {
                season: season.as_u16(),
                race_count,
            })
            .collect())
    }

    /// Rounds of `season` present in qualifying, results and fastest laps
    /// where the same driver holds all three.
    fn season_hat_tricks(&self, season: Season) -> Result<Vec<HatTrick>> {
        let qualifying = self.source().qualifying_results(season)?;
        if qualifying.is_empty() {
            return Ok(Vec::new());
        }
        let results = self.source().race_results(season)?;
        let fastest = self.source().fastest_lap_results(season)?;

        let poles: HashMap<Round, &str> = qualifying
            .iter()
            .filter_map(|q| q.pole_sitter().map(|p| (q.round, p.driver.driver_id.as_str())))
            .collect();
        let fastest_laps: HashMap<Round, &str> = fastest
            .iter()
            .filter_map(|r| {
                r.fastest_lap_holder()
                    .map(|f| (r.round, f.driver.driver_id.as_str()))
            })
            .collect();

        Ok(results
            .iter()
            .filter_map(|race| {
                let winner = race.winner()?;
                let id = winner.driver.driver_id.as_str();
                let pole = poles.get(&race.round)?;
                let fastest = fastest_laps.get(&race.round)?;
                (*pole == id && *fastest == id).then(|| HatTrick {
                    round: race.round,
                    driver_id: id.to_string(),
                    name: driver_name(&winner.driver),
                })
            })
            .collect())
    }

    pub fn hat_tricks(&self, range: &YearRange) -> Result<Vec<HatTrickModel>> {
        let per_season = self.per_season(range, |season| self.season_hat_tricks(season))?;

        Ok(count_names(
            per_season
                .into_iter()
                .flat_map(|(_, tricks)| tricks.into_iter().map(|t| t.name)),
        )
        .into_iter()
        .map(|(name, hat_trick_count)| HatTrickModel {
            name,
            hat_trick_count,
        })
        .collect())
    }

    /// Hat tricks where the driver also led every lap of the race.
    pub fn grand_slams(&self, range: &YearRange) -> Result<Vec<GrandSlamModel>> {
        let per_season = self.per_season(range, |season| {
            let tricks = self.season_hat_tricks(season)?;
            let slams = self.fan_out(tricks, |trick| {
                let laps = self.source().laps(season, trick.round)?;
                let led_all = !laps.is_empty()
                    && laps.iter().all(|lap| {
                        lap.leader().map(|l| l.driver_id.as_str()) == Some(trick.driver_id.as_str())
                    });
                Ok(led_all.then_some(trick.name))
            })?;
            Ok(slams.into_iter().flatten().collect::<Vec<_>>())
        })?;

        Ok(count_names(per_season.into_iter().flat_map(|(_, names)| names))
            .into_iter()
            .map(|(name, grand_slam_count)| GrandSlamModel {
                name,
                grand_slam_count,
            })
            .collect())
    }

    /// Drivers whose result status was neither `Finished` nor lapped.
    pub fn non_finishers(&self, range: &YearRange) -> Result<Vec<DidNotFinishModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .flat_map(|race| {
                    race.results
                        .iter()
                        .filter(|r| !is_finished(&r.status))
                        .map(|r| {
                            (
                                driver_name(&r.driver),
                                DidNotFinishInformationModel {
                                    circuit_name: race.circuit_name().to_string(),
                                    laps_completed: r.laps,
                                },
                            )
                        })
                })
                .collect::<Vec<_>>())
        })?;

        Ok(group_by_name_and_year(per_season)
            .into_iter()
            .map(|(name, years)| {
                let by_year = years
                    .into_iter()
                    .map(|(year, dnfs)| DidNotFinishByYearModel::new(year, dnfs))
                    .collect();
                DidNotFinishModel::new(name, by_year)
            })
            .collect())
    }

    /// Places gained from grid to flag per driver and race. A pit-lane start
    /// (grid 0) counts as starting from the back of the classified field.
    pub fn season_position_changes(
        &self,
        range: &YearRange,
    ) -> Result<Vec<SeasonPositionChangesModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            let standings = self.source().driver_standings(season)?;

            let championship: HashMap<String, u32> = standings
                .iter()
                .enumerate()
                .map(|(i, s)| (driver_name(&s.driver), i as u32 + 1))
                .collect();

            let mut changes: BTreeMap<String, Vec<DriverPositionChangeInformationModel>> =
                BTreeMap::new();
            for race in &races {
                let field = race.results.len() as i32;
                for result in &race.results {
                    let grid = if result.grid == 0 {
                        field
                    } else {
                        result.grid as i32
                    };
                    changes
                        .entry(driver_name(&result.driver))
                        .or_default()
                        .push(DriverPositionChangeInformationModel {
                            circuit_name: race.circuit_name().to_string(),
                            race_position_change: grid - result.position as i32,
                        });
                }
            }

            Ok(SeasonPositionChangesModel {
                year: season.as_u16(),
                position_changes: changes
                    .into_iter()
                    .map(|(name, info)| {
                        let position = championship.get(&name).copied().unwrap_or(0);
                        DriverPositionChangeModel::new(name, info, position)
                    })
                    .collect(),
            })
        })?;

        Ok(per_season.into_iter().map(|(_, model)| model).collect())
    }

    /// Front-row qualifying slots per constructor and circuit; a lockout
    /// counts both cars.
    pub fn constructors_front_rows(&self, range: &YearRange) -> Result<Vec<FrontRowModel>> {
        let per_season = self.per_season(range, |season| {
            let sessions = self.source().qualifying_results(season)?;
            Ok(sessions
                .iter()
                .flat_map(|session| {
                    session
                        .qualifying_results
                        .iter()
                        .filter(|q| q.position == 1 || q.position == 2)
                        .map(|q| {
                            (
                                constructor_name(&q.constructor),
                                session.circuit_name().to_string(),
                            )
                        })
                })
                .collect::<Vec<_>>())
        })?;

        let mut merged: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for (constructor, circuit) in per_season.into_iter().flat_map(|(_, rows)| rows) {
            *merged
                .entry(constructor)
                .or_default()
                .entry(circuit)
                .or_default() += 1;
        }

        Ok(merged
            .into_iter()
            .map(|(name, circuits)| {
                let info = circuits
                    .into_iter()
                    .map(|(circuit_name, circuit_front_row_count)| FrontRowInformationModel {
                        circuit_name,
                        circuit_front_row_count,
                    })
                    .collect();
                FrontRowModel::new(name, info)
            })
            .collect())
    }

    /// Every classified position each driver finished in, with the circuits.
    pub fn drivers_finishing_positions(
        &self,
        range: &YearRange,
    ) -> Result<Vec<DriverFinishingPositionsModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .flat_map(|race| {
                    race.results.iter().map(|r| {
                        (
                            driver_name(&r.driver),
                            r.position,
                            FinishingPositionInformationModel {
                                circuit_name: race.circuit_name().to_string(),
                                finished_race: is_finished(&r.status),
                            },
                        )
                    })
                })
                .collect::<Vec<_>>())
        })?;

        let mut merged: BTreeMap<String, BTreeMap<u32, Vec<FinishingPositionInformationModel>>> =
            BTreeMap::new();
        for (name, position, info) in per_season.into_iter().flat_map(|(_, rows)| rows) {
            merged
                .entry(name)
                .or_default()
                .entry(position)
                .or_default()
                .push(info);
        }

        Ok(merged
            .into_iter()
            .map(|(name, positions)| DriverFinishingPositionsModel {
                name,
                finishing_positions: positions
                    .into_iter()
                    .map(|(position, info)| FinishingPositionModel::new(position, info))
                    .collect(),
            })
            .collect())
    }

    /// Results and laps of one race. `None` when the round has no lap data.
    fn race_with_laps(&self, season: Season, round: Round) -> Result<Option<(Race, Vec<Lap>)>> {
        let laps = self.source().laps(season, round)?;
        if laps.is_empty() {
            return Ok(None);
        }

        let race = self.source().round_results(season, round)?.ok_or_else(|| {
            StatsError::missing(format!("results for {} round {}", season, round))
        })?;
        Ok(Some((race, laps)))
    }

    /// Running position of every driver at the end of each lap.
    pub fn position_changes_during_race(
        &self,
        season: Season,
        round: Round,
    ) -> Result<Vec<RacePositionChangesModel>> {
        let Some((race, laps)) = self.race_with_laps(season, round)? else {
            return Ok(Vec::new());
        };
        let entrants = RaceEntrants::new(&race);

        let mut by_driver: BTreeMap<String, Vec<LapPositionModel>> = BTreeMap::new();
        for lap in &laps {
            for timing in &lap.timings {
                by_driver
                    .entry(entrants.driver_name(&timing.driver_id)?)
                    .or_default()
                    .push(LapPositionModel {
                        lap_number: lap.number,
                        position: timing.position,
                    });
            }
        }

        Ok(by_driver
            .into_iter()
            .map(|(name, laps)| RacePositionChangesModel { name, laps })
            .collect())
    }

    /// Lap times in seconds per driver, in lap order.
    pub fn lap_times(&self, season: Season, round: Round) -> Result<Vec<LapTimesModel>> {
        let Some((race, laps)) = self.race_with_laps(season, round)? else {
            return Ok(Vec::new());
        };
        let entrants = RaceEntrants::new(&race);

        let mut by_driver: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for lap in &laps {
            for timing in &lap.timings {
                let name = entrants.driver_name(&timing.driver_id)?;
                match parse_duration_secs(&timing.time) {
                    Some(secs) => by_driver.entry(name).or_default().push(secs),
                    None => debug!(
                        driver = %timing.driver_id,
                        lap = lap.number,
                        time = %timing.time,
                        "Skipping unparsable lap time"
                    ),
                }
            }
        }

        Ok(by_driver
            .into_iter()
            .map(|(name, timings)| LapTimesModel { name, timings })
            .collect())
    }
}

fn count_names<I>(names: I) -> BTreeMap<String, u32>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = BTreeMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }
    counts
}

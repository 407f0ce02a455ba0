//! Laps led, credited to the driver or constructor in first place at the end
//! of each lap.

use std::collections::{BTreeMap, HashMap};

use super::{Aggregator, RaceEntrants};
use crate::{
    error::Result,
    models::{LeadingLapsByYearModel, LeadingLapsModel},
    options::YearRange,
};


#[derive(Clone, Copy)]
enum Credit {
    Driver,
    Constructor,
}

impl Aggregator {
    pub fn drivers_leading_laps(&self, range: &YearRange) -> Result<Vec<LeadingLapsModel>> {
        self.leading_laps_by(range, Credit::Driver)
    }

    pub fn constructors_leading_laps(&self, range: &YearRange) -> Result<Vec<LeadingLapsModel>> {
        self.leading_laps_by(range, Credit::Constructor)
    }

    fn leading_laps_by(&self, range: &YearRange, credit: Credit) -> Result<Vec<LeadingLapsModel>> {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;

            let per_round = self.fan_out(races, |race| {
                let laps = self.source().laps(season, race.round)?;
                let entrants = RaceEntrants::new(&race);

                let mut led: HashMap<String, u32> = HashMap::new();
                for leader in laps.iter().filter_map(|lap| lap.leader()) {
                    let name = match credit {
                        Credit::Driver => entrants.driver_name(&leader.driver_id)?,
                        Credit::Constructor => entrants.constructor_name(&leader.driver_id)?,
                    };
                    *led.entry(name).or_default() += 1;
                }
                Ok(led)
            })?;

            let mut season_led: HashMap<String, u32> = HashMap::new();
            for (name, count) in per_round.into_iter().flatten() {
                *season_led.entry(name).or_default() += count;
            }
            Ok(season_led)
        })?;

        let mut merged: BTreeMap<String, BTreeMap<u16, u32>> = BTreeMap::new();
        for (season, led) in per_season {
            for (name, count) in led {
                *merged
                    .entry(name)
                    .or_default()
                    .entry(season.as_u16())
                    .or_default() += count;
            }
        }

        Ok(merged
            .into_iter()
            .map(|(name, years)| {
                let by_year = years
                    .into_iter()
                    .map(|(year, leading_lap_count)| LeadingLapsByYearModel {
                        year,
                        leading_lap_count,
                    })
                    .collect();
                LeadingLapsModel::new(name, by_year)
            })
            .collect())
    }
}

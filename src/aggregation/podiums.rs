//! Podium finishes and repeated podium line-ups.

use std::collections::HashMap;

use super::{group_by_name_and_year, Aggregator};
use crate::{
    ergast::{
        names::{constructor_name, driver_name},
        types::RaceResult,
    },
    error::Result,
    models::{PodiumInformationModel, PodiumsByYearModel, PodiumsModel, SamePodiumsModel},
    options::YearRange,
};


impl Aggregator {
    pub fn drivers_podiums(&self, range: &YearRange) -> Result<Vec<PodiumsModel>> {
        self.podiums_by(range, |r| driver_name(&r.driver))
    }

    pub fn constructors_podiums(&self, range: &YearRange) -> Result<Vec<PodiumsModel>> {
        self.podiums_by(range, |r| constructor_name(&r.constructor))
    }

    fn podiums_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<PodiumsModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .flat_map(|race| {
                    race.podium().iter().map(|finisher| {
                        (
                            key(finisher),
                            PodiumInformationModel {
                                circuit_name: race.circuit_name().to_string(),
                                podium_position: finisher.position,
                                grid_position: finisher.grid,
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
                    .map(|(year, podiums)| PodiumsByYearModel::new(year, podiums))
                    .collect();
                PodiumsModel::new(name, by_year)
            })
            .collect())
    }

    pub fn same_drivers_podiums(&self, range: &YearRange) -> Result<Vec<SamePodiumsModel>> {
        self.same_podiums_by(range, |r| driver_name(&r.driver))
    }

    pub fn same_constructors_podiums(&self, range: &YearRange) -> Result<Vec<SamePodiumsModel>> {
        self.same_podiums_by(range, |r| constructor_name(&r.constructor))
    }

    /// Podium line-ups compared as unordered multisets; only complete
    /// three-place podiums count.
    fn same_podiums_by<K>(&self, range: &YearRange, key: K) -> Result<Vec<SamePodiumsModel>>
    where
        K: Fn(&RaceResult) -> String + Send + Sync,
    {
        let per_season = self.per_season(range, |season| {
            let races = self.source().race_results(season)?;
            Ok(races
                .iter()
                .filter(|race| race.podium().len() == 3)
                .map(|race| {
                    let finishers: Vec<String> = race.podium().iter().map(&key).collect();
                    (finishers, race.circuit_name().to_string())
                })
                .collect::<Vec<_>>())
        })?;

        let mut podiums: Vec<SamePodiumsModel> = Vec::new();
        let mut index: HashMap<Vec<String>, usize> = HashMap::new();

        for (finishers, circuit) in per_season.into_iter().flat_map(|(_, races)| races) {
            let mut line_up = finishers.clone();
            line_up.sort();

            match index.get(&line_up) {
                Some(&i) => {
                    podiums[i].same_podium_count += 1;
                    podiums[i].circuits.push(circuit);
                }
                None => {
                    index.insert(line_up, podiums.len());
                    podiums.push(SamePodiumsModel {
                        podium_finishers: finishers,
                        same_podium_count: 1,
                        circuits: vec![circuit],
                    });
                }
            }
        }

        Ok(podiums)
    }
}

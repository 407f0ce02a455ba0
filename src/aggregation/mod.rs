//! Per-season fetch and grouping of upstream records into report payloads.
//!
//! Every report follows the same shape: fan out one task per season on a
//! bounded rayon pool, accumulate that season's facts locally, then merge the
//! per-season results on the calling thread. The first failing fetch aborts
//! the whole report. Output is ordered by key (name, season, grid slot);
//! ranking by counts is left to [`crate::services`].

pub mod fastest_laps;
pub mod leading_laps;
pub mod misc;
pub mod podiums;
pub mod points;
pub mod poles;
pub mod wins;

#[cfg(test)]
pub(crate) mod fixtures;

use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use crate::{
    ergast::{
        names::driver_name,
        types::{Race, RaceResult},
        RaceDataSource,
    },
    error::{Result, StatsError},
    options::{Season, YearRange},
};

/// Entries grouped by entity name, then by season.
pub(crate) type ByNameAndYear<T> = BTreeMap<String, BTreeMap<u16, Vec<T>>>;

pub struct Aggregator {
    source: Arc<dyn RaceDataSource>,
    pool: ThreadPool,
}

impl Aggregator {
    /// `max_parallel_fetches` bounds how many upstream requests run at once.
    pub fn new(source: Arc<dyn RaceDataSource>, max_parallel_fetches: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(max_parallel_fetches.max(1))
            .thread_name(|i| format!("f1-fetch-{}", i))
            .build()?;

        Ok(Self { source, pool })
    }

    pub fn source(&self) -> &dyn RaceDataSource {
        self.source.as_ref()
    }

    /// Run `task` once per season of `range` on the fetch pool.
    ///
    /// Results come back in season order regardless of completion order.
    pub(crate) fn per_season<T, F>(&self, range: &YearRange, task: F) -> Result<Vec<(Season, T)>>
    where
        T: Send,
        F: Fn(Season) -> Result<T> + Send + Sync,
    {
        let seasons: Vec<Season> = range.seasons().collect();
        self.fan_out(seasons, |season| task(season).map(|value| (season, value)))
    }

    /// Run `task` for every item on the fetch pool, preserving input order.
    pub(crate) fn fan_out<I, T, F>(&self, items: Vec<I>, task: F) -> Result<Vec<T>>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> Result<T> + Send + Sync,
    {
        self.pool
            .install(|| items.into_par_iter().map(task).collect())
    }
}

/// Merge per-season `(name, entry)` lists into a name/season index.
pub(crate) fn group_by_name_and_year<T>(per_season: Vec<(Season, Vec<(String, T)>)>) -> ByNameAndYear<T> {
    let mut grouped: ByNameAndYear<T> = BTreeMap::new();
    for (season, entries) in per_season {
        for (name, entry) in entries {
            grouped
                .entry(name)
                .or_default()
                .entry(season.as_u16())
                .or_default()
                .push(entry);
        }
    }
    grouped
}

/// Distinct values in first-seen order.
pub(crate) fn distinct_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// A classified finish: `Finished` or a lapped `+N Lap(s)`.
pub(crate) fn is_finished(status: &str) -> bool {
    let status = status.trim();
    status == "Finished" || (status.starts_with('+') && status.contains("Lap"))
}

/// Driver id to driver and constructor display names for one race.
pub(crate) struct RaceEntrants<'a> {
    by_id: HashMap<&'a str, &'a RaceResult>,
    season: Season,
    round: u32,
}

impl<'a> RaceEntrants<'a> {
    pub(crate) fn new(race: &'a Race) -> Self {
        Self {
            by_id: race
                .results
                .iter()
                .map(|r| (r.driver.driver_id.as_str(), r))
                .collect(),
            season: race.season,
            round: race.round.as_u32(),
        }
    }

    fn lookup(&self, driver_id: &str) -> Result<&'a RaceResult> {
        self.by_id.get(driver_id).copied().ok_or_else(|| {
            StatsError::missing(format!(
                "driver '{}' in the results of {} round {}",
                driver_id, self.season, self.round
            ))
        })
    }

    pub(crate) fn driver_name(&self, driver_id: &str) -> Result<String> {
        self.lookup(driver_id).map(|r| driver_name(&r.driver))
    }

    pub(crate) fn constructor_name(&self, driver_id: &str) -> Result<String> {
        self.lookup(driver_id).map(|r| r.constructor.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::fixtures::FixtureSource;
    use crate::options::Round;

    #[test]
    fn test_per_season_keeps_season_order() {
        let aggregator = Aggregator::new(Arc::new(FixtureSource::default()), 4).unwrap();
        let range = YearRange::new(Season::new(2000), Season::new(2009));

        let seasons = aggregator
            .per_season(&range, |season| Ok(season.as_u16() * 2))
            .unwrap();

        let years: Vec<u16> = seasons.iter().map(|(s, _)| s.as_u16()).collect();
        assert_eq!(years, (2000..=2009).collect::<Vec<_>>());
        assert!(seasons.iter().all(|(s, v)| *v == s.as_u16() * 2));
    }

    #[test]
    fn test_per_season_fails_fast() {
        let aggregator = Aggregator::new(Arc::new(FixtureSource::default()), 2).unwrap();
        let range = YearRange::new(Season::new(2000), Season::new(2003));

        let result = aggregator.per_season(&range, |season| {
            if season.as_u16() == 2002 {
                Err(StatsError::missing("2002"))
            } else {
                Ok(())
            }
        });

        assert!(matches!(result, Err(StatsError::MissingData { .. })));
    }

    #[test]
    fn test_group_by_name_and_year() {
        let grouped = group_by_name_and_year(vec![
            (Season::new(2001), vec![("B".to_string(), 1), ("A".to_string(), 2)]),
            (Season::new(2002), vec![("B".to_string(), 3), ("B".to_string(), 4)]),
        ]);

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(grouped["B"][&2001], vec![1]);
        assert_eq!(grouped["B"][&2002], vec![3, 4]);
    }

    #[test]
    fn test_distinct_in_order() {
        let values = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string());
        assert_eq!(distinct_in_order(values), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_is_finished() {
        assert!(is_finished("Finished"));
        assert!(is_finished("+1 Lap"));
        assert!(is_finished("+3 Laps"));
        assert!(!is_finished("Engine"));
        assert!(!is_finished("Accident"));
        assert!(!is_finished("Disqualified"));
    }

    #[test]
    fn test_race_entrants_lookup() {
        use crate::aggregation::fixtures::{race, result};

        let race = race(
            2005,
            3,
            "Bahrain",
            vec![result(1, 1, "alonso", "Renault", "Finished")],
        );
        let entrants = RaceEntrants::new(&race);

        assert_eq!(entrants.driver_name("alonso").unwrap(), "alonso Driver");
        assert_eq!(entrants.constructor_name("alonso").unwrap(), "Renault");
        assert!(matches!(
            entrants.driver_name("nobody"),
            Err(StatsError::MissingData { .. })
        ));
        assert_eq!(race.round, Round::new(3));
    }
}

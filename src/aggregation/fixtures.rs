//! Literal upstream-shaped records for aggregator and service tests.

use std::{
    collections::{HashMap, HashSet},
    io,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    ergast::{
        types::{
            Circuit, Constructor, ConstructorStanding, Driver, DriverStanding, FastestLap, Lap,
            QualifyingResult, Race, RaceResult, ResultTime, Timing,
        },
        RaceDataSource,
    },
    error::{Result, StatsError},
    options::{Round, Season},
};

/// Driver `id` displays as `"{id} Driver"`.
pub(crate) fn driver(id: &str) -> Driver {
    Driver {
        driver_id: id.to_string(),
        given_name: id.to_string(),
        family_name: "Driver".to_string(),
    }
}

pub(crate) fn constructor(name: &str) -> Constructor {
    Constructor {
        constructor_id: name.to_lowercase(),
        name: name.to_string(),
    }
}

pub(crate) fn result(
    position: u32,
    grid: u32,
    driver_id: &str,
    constructor_name: &str,
    status: &str,
) -> RaceResult {
    RaceResult {
        position,
        grid,
        laps: 50,
        status: status.to_string(),
        points: 0.0,
        driver: driver(driver_id),
        constructor: constructor(constructor_name),
        time: None,
        fastest_lap: None,
    }
}

pub(crate) fn with_time(mut result: RaceResult, time: &str) -> RaceResult {
    result.time = Some(ResultTime {
        millis: None,
        time: time.to_string(),
    });
    result
}

pub(crate) fn with_laps(mut result: RaceResult, laps: u32) -> RaceResult {
    result.laps = laps;
    result
}

pub(crate) fn with_fastest_rank(mut result: RaceResult, rank: u32) -> RaceResult {
    result.fastest_lap = Some(FastestLap {
        rank: Some(rank),
        lap: None,
    });
    result
}

pub(crate) fn race(season: u16, round: u32, circuit: &str, results: Vec<RaceResult>) -> Race {
    Race {
        season: Season::new(season),
        round: Round::new(round),
        race_name: format!("{} Grand Prix", circuit),
        circuit: Circuit {
            circuit_id: circuit.to_lowercase(),
            circuit_name: circuit.to_string(),
        },
        results,
        qualifying_results: Vec::new(),
        laps: Vec::new(),
    }
}

/// A qualifying session from `(position, driver id, constructor)` rows.
pub(crate) fn qualifying(season: u16, round: u32, circuit: &str, rows: &[(u32, &str, &str)]) -> Race {
    let mut race = race(season, round, circuit, Vec::new());
    race.qualifying_results = rows
        .iter()
        .map(|(position, driver_id, constructor_name)| QualifyingResult {
            position: *position,
            driver: driver(driver_id),
            constructor: constructor(constructor_name),
        })
        .collect();
    race
}

/// A lap from `(driver id, position, time)` rows.
pub(crate) fn lap(number: u32, rows: &[(&str, u32, &str)]) -> Lap {
    Lap {
        number,
        timings: rows
            .iter()
            .map(|(driver_id, position, time)| Timing {
                driver_id: driver_id.to_string(),
                position: *position,
                time: time.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn driver_standing(driver_id: &str, points: f64) -> DriverStanding {
    DriverStanding {
        points,
        wins: 0,
        driver: driver(driver_id),
    }
}

pub(crate) fn constructor_standing(name: &str, points: f64) -> ConstructorStanding {
    ConstructorStanding {
        points,
        wins: 0,
        constructor: constructor(name),
    }
}

/// In-memory [`RaceDataSource`]. Unknown seasons and rounds are empty.
#[derive(Default)]
pub(crate) struct FixtureSource {
    pub results: HashMap<u16, Vec<Race>>,
    pub qualifying: HashMap<u16, Vec<Race>>,
    pub fastest: HashMap<u16, Vec<Race>>,
    pub race_counts: HashMap<u16, u32>,
    pub driver_standings: HashMap<u16, Vec<DriverStanding>>,
    pub constructor_standings: HashMap<u16, Vec<ConstructorStanding>>,
    pub driver_standings_after: HashMap<(u16, u32), Vec<DriverStanding>>,
    pub constructor_standings_after: HashMap<(u16, u32), Vec<ConstructorStanding>>,
    pub laps: HashMap<(u16, u32), Vec<Lap>>,
    pub failing_seasons: HashSet<u16>,
    fetches: AtomicUsize,
}

impl FixtureSource {
    pub fn with_results(mut self, season: u16, races: Vec<Race>) -> Self {
        self.results.insert(season, races);
        self
    }

    pub fn with_qualifying(mut self, season: u16, races: Vec<Race>) -> Self {
        self.qualifying.insert(season, races);
        self
    }

    pub fn with_fastest(mut self, season: u16, races: Vec<Race>) -> Self {
        self.fastest.insert(season, races);
        self
    }

    pub fn with_laps(mut self, season: u16, round: u32, laps: Vec<Lap>) -> Self {
        self.laps.insert((season, round), laps);
        self
    }

    pub fn failing(mut self, season: u16) -> Self {
        self.failing_seasons.insert(season);
        self
    }

    /// Number of data-source calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn record(&self, season: Season) -> Result<()> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing_seasons.contains(&season.as_u16()) {
            return Err(StatsError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("upstream unavailable for {}", season),
            )));
        }
        Ok(())
    }
}

impl RaceDataSource for FixtureSource {
    fn race_results(&self, season: Season) -> Result<Vec<Race>> {
        self.record(season)?;
        Ok(self.results.get(&season.as_u16()).cloned().unwrap_or_default())
    }

    fn qualifying_results(&self, season: Season) -> Result<Vec<Race>> {
        self.record(season)?;
        Ok(self.qualifying.get(&season.as_u16()).cloned().unwrap_or_default())
    }

    fn fastest_lap_results(&self, season: Season) -> Result<Vec<Race>> {
        self.record(season)?;
        Ok(self.fastest.get(&season.as_u16()).cloned().unwrap_or_default())
    }

    fn race_count(&self, season: Season) -> Result<u32> {
        self.record(season)?;
        Ok(self.race_counts.get(&season.as_u16()).copied().unwrap_or(0))
    }

    fn driver_standings(&self, season: Season) -> Result<Vec<DriverStanding>> {
        self.record(season)?;
        Ok(self
            .driver_standings
            .get(&season.as_u16())
            .cloned()
            .unwrap_or_default())
    }

    fn constructor_standings(&self, season: Season) -> Result<Vec<ConstructorStanding>> {
        self.record(season)?;
        Ok(self
            .constructor_standings
            .get(&season.as_u16())
            .cloned()
            .unwrap_or_default())
    }

    fn driver_standings_after(&self, season: Season, round: Round) -> Result<Vec<DriverStanding>> {
        self.record(season)?;
        Ok(self
            .driver_standings_after
            .get(&(season.as_u16(), round.as_u32()))
            .cloned()
            .unwrap_or_default())
    }

    fn constructor_standings_after(
        &self,
        season: Season,
        round: Round,
    ) -> Result<Vec<ConstructorStanding>> {
        self.record(season)?;
        Ok(self
            .constructor_standings_after
            .get(&(season.as_u16(), round.as_u32()))
            .cloned()
            .unwrap_or_default())
    }

    fn round_results(&self, season: Season, round: Round) -> Result<Option<Race>> {
        self.record(season)?;
        Ok(self
            .results
            .get(&season.as_u16())
            .and_then(|races| races.iter().find(|r| r.round == round))
            .cloned())
    }

    fn laps(&self, season: Season, round: Round) -> Result<Vec<Lap>> {
        self.record(season)?;
        Ok(self
            .laps
            .get(&(season.as_u16(), round.as_u32()))
            .cloned()
            .unwrap_or_default())
    }
}

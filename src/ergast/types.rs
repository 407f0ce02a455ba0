//! Serde mirrors of the Ergast `MRData` JSON envelope.
//!
//! Ergast encodes every number as a string (`"round": "3"`, `"points": "12.5"`),
//! so numeric fields go through [`de_from_str`].

use crate::options::{Round, Season};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};


fn de_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse::<T>().map_err(D::Error::custom)
}

fn de_opt_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(D::Error::custom),
    }
}

/// Top-level envelope of every Ergast response.
#[derive(Debug, Clone, Deserialize)]
pub struct MrDataEnvelope {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MrData {
    #[serde(deserialize_with = "de_from_str", default)]
    pub limit: u32,
    #[serde(deserialize_with = "de_from_str", default)]
    pub offset: u32,
    #[serde(deserialize_with = "de_from_str", default)]
    pub total: u32,
    #[serde(rename = "RaceTable", default)]
    pub race_table: Option<RaceTable>,
    #[serde(rename = "StandingsTable", default)]
    pub standings_table: Option<StandingsTable>,
}

impl MrData {
    pub fn into_races(self) -> Vec<Race> {
        self.race_table.map(|t| t.races).unwrap_or_default()
    }

    pub fn into_standings_lists(self) -> Vec<StandingsList> {
        self.standings_table
            .map(|t| t.standings_lists)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

/// One race weekend. Depending on the endpoint only one of `results`,
/// `qualifying_results` or `laps` is populated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Race {
    #[serde(deserialize_with = "de_from_str")]
    pub season: Season,
    #[serde(deserialize_with = "de_from_str")]
    pub round: Round,
    #[serde(rename = "raceName", default)]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    #[serde(rename = "Results", default)]
    pub results: Vec<RaceResult>,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<QualifyingResult>,
    #[serde(rename = "Laps", default)]
    pub laps: Vec<Lap>,
}

impl Race {
    /// Classified winner, if the race has results.
    pub fn winner(&self) -> Option<&RaceResult> {
        self.results.first()
    }

    pub fn runner_up(&self) -> Option<&RaceResult> {
        self.results.get(1)
    }

    /// Up to three podium finishers in finishing order.
    pub fn podium(&self) -> &[RaceResult] {
        &self.results[..self.results.len().min(3)]
    }

    pub fn pole_sitter(&self) -> Option<&QualifyingResult> {
        self.qualifying_results.iter().find(|q| q.position == 1)
    }

    /// Holder of the fastest lap. Falls back to the first result for
    /// responses already filtered to the fastest lap only.
    pub fn fastest_lap_holder(&self) -> Option<&RaceResult> {
        self.results
            .iter()
            .find(|r| r.fastest_lap.as_ref().and_then(|f| f.rank) == Some(1))
            .or_else(|| self.results.first())
    }

    pub fn circuit_name(&self) -> &str {
        &self.circuit.circuit_name
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Circuit {
    #[serde(rename = "circuitId", default)]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Constructor {
    #[serde(rename = "constructorId", default)]
    pub constructor_id: String,
    pub name: String,
}

/// A classified race result row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaceResult {
    #[serde(deserialize_with = "de_from_str")]
    pub position: u32,
    /// Starting slot; 0 means a pit-lane start.
    #[serde(deserialize_with = "de_from_str", default)]
    pub grid: u32,
    /// Laps completed.
    #[serde(deserialize_with = "de_from_str", default)]
    pub laps: u32,
    #[serde(default)]
    pub status: String,
    #[serde(deserialize_with = "de_from_str", default)]
    pub points: f64,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    #[serde(rename = "Time", default)]
    pub time: Option<ResultTime>,
    #[serde(rename = "FastestLap", default)]
    pub fastest_lap: Option<FastestLap>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultTime {
    #[serde(default)]
    pub millis: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FastestLap {
    #[serde(deserialize_with = "de_opt_from_str", default)]
    pub rank: Option<u32>,
    #[serde(deserialize_with = "de_opt_from_str", default)]
    pub lap: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QualifyingResult {
    #[serde(deserialize_with = "de_from_str")]
    pub position: u32,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lap {
    #[serde(deserialize_with = "de_from_str")]
    pub number: u32,
    #[serde(rename = "Timings", default)]
    pub timings: Vec<Timing>,
}

impl Lap {
    /// The driver running first at the end of this lap.
    pub fn leader(&self) -> Option<&Timing> {
        self.timings
            .iter()
            .find(|t| t.position == 1)
            .or_else(|| self.timings.first())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Timing {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(deserialize_with = "de_from_str", default)]
    pub position: u32,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsList {
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriverStanding {
    #[serde(deserialize_with = "de_from_str", default)]
    pub points: f64,
    #[serde(deserialize_with = "de_from_str", default)]
    pub wins: u32,
    #[serde(rename = "Driver")]
    pub driver: Driver,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConstructorStanding {
    #[serde(deserialize_with = "de_from_str", default)]
    pub points: f64,
    #[serde(deserialize_with = "de_from_str", default)]
    pub wins: u32,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

//! Fastest-lap reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastestLapsByYearModel {
    pub year: u16,
    pub circuits: Vec<String>,
    pub year_fastest_laps_count: usize,
}

impl FastestLapsByYearModel {
    pub fn new(year: u16, circuits: Vec<String>) -> Self {
        Self {
            year,
            year_fastest_laps_count: circuits.len(),
            circuits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastestLapModel {
    pub name: String,
    pub fastest_laps_by_year: Vec<FastestLapsByYearModel>,
    pub total_fastest_laps_count: usize,
}

impl FastestLapModel {
    pub fn new(name: String, fastest_laps_by_year: Vec<FastestLapsByYearModel>) -> Self {
        Self {
            name,
            total_fastest_laps_count: fastest_laps_by_year
                .iter()
                .map(|y| y.year_fastest_laps_count)
                .sum(),
            fastest_laps_by_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueSeasonFastestLapModel {
    pub season: u16,
    pub fastest_lap_achievers: Vec<String>,
    pub unique_fastest_lap_achievers_count: usize,
}

impl UniqueSeasonFastestLapModel {
    pub fn new(season: u16, fastest_lap_achievers: Vec<String>) -> Self {
        Self {
            season,
            unique_fastest_lap_achievers_count: fastest_lap_achievers.len(),
            fastest_lap_achievers,
        }
    }
}

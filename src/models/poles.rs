//! Pole-position reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolesByYearModel {
    pub year: u16,
    pub circuits: Vec<String>,
    pub year_pole_count: usize,
}

impl PolesByYearModel {
    pub fn new(year: u16, circuits: Vec<String>) -> Self {
        Self {
            year,
            year_pole_count: circuits.len(),
            circuits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolesModel {
    pub name: String,
    pub poles_by_year: Vec<PolesByYearModel>,
    pub total_pole_count: usize,
}

impl PolesModel {
    pub fn new(name: String, poles_by_year: Vec<PolesByYearModel>) -> Self {
        Self {
            name,
            total_pole_count: poles_by_year.iter().map(|y| y.year_pole_count).sum(),
            poles_by_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueSeasonPoleCountModel {
    pub season: u16,
    pub pole_sitters: Vec<String>,
    pub unique_pole_sitters_count: usize,
}

impl UniqueSeasonPoleCountModel {
    pub fn new(season: u16, pole_sitters: Vec<String>) -> Self {
        Self {
            season,
            unique_pole_sitters_count: pole_sitters.len(),
            pole_sitters,
        }
    }
}

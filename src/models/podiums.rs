//! Podium reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumInformationModel {
    pub circuit_name: String,
    pub podium_position: u32,
    pub grid_position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumsByYearModel {
    pub year: u16,
    pub podium_information: Vec<PodiumInformationModel>,
    pub year_podium_count: usize,
}

impl PodiumsByYearModel {
    pub fn new(year: u16, podium_information: Vec<PodiumInformationModel>) -> Self {
        Self {
            year,
            year_podium_count: podium_information.len(),
            podium_information,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumsModel {
    pub name: String,
    pub podiums_by_year: Vec<PodiumsByYearModel>,
    pub total_podium_count: usize,
}

impl PodiumsModel {
    pub fn new(name: String, podiums_by_year: Vec<PodiumsByYearModel>) -> Self {
        Self {
            name,
            total_podium_count: podiums_by_year.iter().map(|y| y.year_podium_count).sum(),
            podiums_by_year,
        }
    }
}

/// Races that finished with the same three names on the podium, in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamePodiumsModel {
    /// Finishing order of the first race with this podium.
    pub podium_finishers: Vec<String>,
    pub same_podium_count: u32,
    pub circuits: Vec<String>,
}

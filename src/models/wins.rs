//! Race-win reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinInformationModel {
    pub circuit_name: String,
    /// Seconds between the winner and the runner-up; 0 when unknown.
    pub gap_to_second: f64,
    pub grid_position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsByYearModel {
    pub year: u16,
    pub win_information: Vec<WinInformationModel>,
    pub year_win_count: usize,
}

impl WinsByYearModel {
    pub fn new(year: u16, win_information: Vec<WinInformationModel>) -> Self {
        Self {
            year,
            year_win_count: win_information.len(),
            win_information,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsModel {
    pub name: String,
    pub wins_by_year: Vec<WinsByYearModel>,
    pub total_win_count: usize,
}

impl WinsModel {
    pub fn new(name: String, wins_by_year: Vec<WinsByYearModel>) -> Self {
        Self {
            name,
            total_win_count: wins_by_year.iter().map(|y| y.year_win_count).sum(),
            wins_by_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageWinsModel {
    pub name: String,
    pub win_count: u32,
    pub participation_count: u32,
    /// `winCount / participationCount * 100`, 0 without participations.
    pub win_percent: f64,
}

impl AverageWinsModel {
    pub fn new(name: String, win_count: u32, participation_count: u32) -> Self {
        let win_percent = if participation_count == 0 {
            0.0
        } else {
            f64::from(win_count) / f64::from(participation_count) * 100.0
        };

        Self {
            name,
            win_count,
            participation_count,
            win_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsAndParticipationsModel {
    pub name: String,
    pub win_count: u32,
    pub participations_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitWinsModel {
    /// Circuit name.
    pub name: String,
    pub winners: Vec<WinsAndParticipationsModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueSeasonWinnersModel {
    pub season: u16,
    pub winners: Vec<String>,
    pub races_count: u32,
    pub unique_winners_count: usize,
}

impl UniqueSeasonWinnersModel {
    pub fn new(season: u16, winners: Vec<String>, races_count: u32) -> Self {
        Self {
            season,
            unique_winners_count: winners.len(),
            winners,
            races_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersFromPoleModel {
    pub season: u16,
    pub races_count: u32,
    /// One entry per win from pole, so a name may repeat.
    pub winners_from_pole: Vec<String>,
    pub wins_from_pole_count: usize,
}

impl WinnersFromPoleModel {
    pub fn new(season: u16, races_count: u32, winners_from_pole: Vec<String>) -> Self {
        Self {
            season,
            races_count,
            wins_from_pole_count: winners_from_pole.len(),
            winners_from_pole,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinByGridInformationModel {
    pub winner_name: String,
    pub circuit_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsByGridPositionModel {
    pub grid_position: u32,
    pub win_information: Vec<WinByGridInformationModel>,
    pub win_count: usize,
}

impl WinsByGridPositionModel {
    pub fn new(grid_position: u32, win_information: Vec<WinByGridInformationModel>) -> Self {
        Self {
            grid_position,
            win_count: win_information.len(),
            win_information,
        }
    }
}

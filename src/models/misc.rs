//! Race-count, hat-trick, reliability and position reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRacesModel {
    pub season: u16,
    pub race_count: u32,
}

/// Pole, win and fastest lap in the same race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HatTrickModel {
    pub name: String,
    pub hat_trick_count: u32,
}

/// A hat trick where the driver also led every lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandSlamModel {
    pub name: String,
    pub grand_slam_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidNotFinishInformationModel {
    pub circuit_name: String,
    pub laps_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidNotFinishByYearModel {
    pub year: u16,
    pub did_not_finish_information: Vec<DidNotFinishInformationModel>,
    pub year_did_not_finish_count: usize,
}

impl DidNotFinishByYearModel {
    pub fn new(year: u16, did_not_finish_information: Vec<DidNotFinishInformationModel>) -> Self {
        Self {
            year,
            year_did_not_finish_count: did_not_finish_information.len(),
            did_not_finish_information,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidNotFinishModel {
    pub name: String,
    pub did_not_finish_by_year: Vec<DidNotFinishByYearModel>,
    pub total_did_not_finish_count: usize,
}

impl DidNotFinishModel {
    pub fn new(name: String, did_not_finish_by_year: Vec<DidNotFinishByYearModel>) -> Self {
        Self {
            name,
            total_did_not_finish_count: did_not_finish_by_year
                .iter()
                .map(|y| y.year_did_not_finish_count)
                .sum(),
            did_not_finish_by_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPositionChangeInformationModel {
    pub circuit_name: String,
    /// Places gained (positive) or lost (negative) from grid to flag.
    pub race_position_change: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPositionChangeModel {
    pub name: String,
    pub driver_position_change_information: Vec<DriverPositionChangeInformationModel>,
    /// Final championship position; 0 when the driver is not classified.
    pub championship_position: u32,
    pub total_position_change: i32,
}

impl DriverPositionChangeModel {
    pub fn new(
        name: String,
        driver_position_change_information: Vec<DriverPositionChangeInformationModel>,
        championship_position: u32,
    ) -> Self {
        Self {
            name,
            total_position_change: driver_position_change_information
                .iter()
                .map(|c| c.race_position_change)
                .sum(),
            driver_position_change_information,
            championship_position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPositionChangesModel {
    pub year: u16,
    pub position_changes: Vec<DriverPositionChangeModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontRowInformationModel {
    pub circuit_name: String,
    pub circuit_front_row_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontRowModel {
    /// Constructor name.
    pub name: String,
    pub front_row_information: Vec<FrontRowInformationModel>,
    pub total_front_row_count: u32,
}

impl FrontRowModel {
    pub fn new(name: String, front_row_information: Vec<FrontRowInformationModel>) -> Self {
        Self {
            name,
            total_front_row_count: front_row_information
                .iter()
                .map(|c| c.circuit_front_row_count)
                .sum(),
            front_row_information,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishingPositionInformationModel {
    pub circuit_name: String,
    pub finished_race: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishingPositionModel {
    pub finishing_position: u32,
    pub finishing_position_information: Vec<FinishingPositionInformationModel>,
    pub count: usize,
}

impl FinishingPositionModel {
    pub fn new(
        finishing_position: u32,
        finishing_position_information: Vec<FinishingPositionInformationModel>,
    ) -> Self {
        Self {
            finishing_position,
            count: finishing_position_information.len(),
            finishing_position_information,
        }
    }

    pub fn empty(finishing_position: u32) -> Self {
        Self::new(finishing_position, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverFinishingPositionsModel {
    pub name: String,
    pub finishing_positions: Vec<FinishingPositionModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapPositionModel {
    pub lap_number: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePositionChangesModel {
    pub name: String,
    pub laps: Vec<LapPositionModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapTimesModel {
    pub name: String,
    /// Lap times in seconds.
    pub timings: Vec<f64>,
}

//! Championship points reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsModel {
    pub name: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPointsModel {
    pub year: u16,
    pub scored_points: Vec<PointsModel>,
    pub total_points: f64,
}

impl SeasonPointsModel {
    pub fn new(year: u16, scored_points: Vec<PointsModel>) -> Self {
        Self {
            year,
            total_points: scored_points.iter().map(|p| p.points).sum(),
            scored_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWinnersPointsModel {
    pub year: u16,
    pub winner: String,
    pub points: f64,
    pub races_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundModel {
    pub round: u32,
    pub round_name: String,
    pub points: f64,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingModel {
    pub name: String,
    pub rounds: Vec<RoundModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStandingsChangesModel {
    pub year: u16,
    pub standings: Vec<StandingModel>,
}

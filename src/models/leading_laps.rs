use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadingLapsByYearModel {
    pub year: u16,
    pub leading_lap_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadingLapsModel {
    pub name: String,
    pub leading_laps_by_year: Vec<LeadingLapsByYearModel>,
    pub leading_lap_count: u32,
}

impl LeadingLapsModel {
    pub fn new(name: String, leading_laps_by_year: Vec<LeadingLapsByYearModel>) -> Self {
        Self {
            name,
            leading_lap_count: leading_laps_by_year.iter().map(|y| y.leading_lap_count).sum(),
            leading_laps_by_year,
        }
    }
}

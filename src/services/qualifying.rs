//! Fastest-lap, pole and lap-leader reports. Each is gated on the first
//! season its upstream records exist for.

use super::{rank_desc_by, StatsService};
use crate::{
    error::Result,
    models::{
        FastestLapModel, LeadingLapsModel, PolesModel, UniqueSeasonFastestLapModel,
        UniqueSeasonPoleCountModel,
    },
    options::{
        validator::{validate_fastest_lap_range, validate_lap_data_range, validate_qualifying_range},
        OptionsModel,
    },
};

impl StatsService {
    pub fn drivers_fastest_laps(&self, options: &OptionsModel) -> Result<Vec<FastestLapModel>> {
        let range = self.checked_range("drivers fastest laps", options, validate_fastest_lap_range)?;
        let mut laps = self.aggregator().drivers_fastest_laps(&range)?;
        rank_desc_by(&mut laps, |l| l.total_fastest_laps_count);
        Ok(laps)
    }

    pub fn constructors_fastest_laps(&self, options: &OptionsModel) -> Result<Vec<FastestLapModel>> {
        let range = self.checked_range(
            "constructors fastest laps",
            options,
            validate_fastest_lap_range,
        )?;
        let mut laps = self.aggregator().constructors_fastest_laps(&range)?;
        rank_desc_by(&mut laps, |l| l.total_fastest_laps_count);
        Ok(laps)
    }

    pub fn unique_drivers_fastest_laps(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonFastestLapModel>> {
        let range = self.checked_range(
            "unique drivers fastest laps",
            options,
            validate_fastest_lap_range,
        )?;
        self.aggregator().unique_drivers_fastest_laps(&range)
    }

    pub fn unique_constructors_fastest_laps(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonFastestLapModel>> {
        let range = self.checked_range(
            "unique constructors fastest laps",
            options,
            validate_fastest_lap_range,
        )?;
        self.aggregator().unique_constructors_fastest_laps(&range)
    }

    pub fn drivers_poles(&self, options: &OptionsModel) -> Result<Vec<PolesModel>> {
        let range = self.checked_range("drivers poles", options, validate_qualifying_range)?;
        let mut poles = self.aggregator().drivers_poles(&range)?;
        rank_desc_by(&mut poles, |p| p.total_pole_count);
        Ok(poles)
    }

    pub fn constructors_poles(&self, options: &OptionsModel) -> Result<Vec<PolesModel>> {
        let range = self.checked_range("constructors poles", options, validate_qualifying_range)?;
        let mut poles = self.aggregator().constructors_poles(&range)?;
        rank_desc_by(&mut poles, |p| p.total_pole_count);
        Ok(poles)
    }

    pub fn unique_drivers_poles(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonPoleCountModel>> {
        let range = self.checked_range("unique drivers poles", options, validate_qualifying_range)?;
        self.aggregator().unique_drivers_poles(&range)
    }

    pub fn unique_constructors_poles(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonPoleCountModel>> {
        let range = self.checked_range(
            "unique constructors poles",
            options,
            validate_qualifying_range,
        )?;
        self.aggregator().unique_constructors_poles(&range)
    }

    pub fn drivers_leading_laps(&self, options: &OptionsModel) -> Result<Vec<LeadingLapsModel>> {
        let range = self.checked_range("drivers leading laps", options, validate_lap_data_range)?;
        let mut laps = self.aggregator().drivers_leading_laps(&range)?;
        rank_desc_by(&mut laps, |l| l.leading_lap_count);
        Ok(laps)
    }

    pub fn constructors_leading_laps(&self, options: &OptionsModel) -> Result<Vec<LeadingLapsModel>> {
        let range = self.checked_range(
            "constructors leading laps",
            options,
            validate_lap_data_range,
        )?;
        let mut laps = self.aggregator().constructors_leading_laps(&range)?;
        rank_desc_by(&mut laps, |l| l.leading_lap_count);
        Ok(laps)
    }
}

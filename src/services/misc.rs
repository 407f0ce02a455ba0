use super::{rank_desc_by, StatsService};
use crate::{
    error::Result,
    models::{
        DidNotFinishModel, DriverFinishingPositionsModel, FinishingPositionModel, FrontRowModel,
        GrandSlamModel, HatTrickModel, LapTimesModel, RacePositionChangesModel,
        SeasonPositionChangesModel, SeasonRacesModel,
    },
    options::{
        validator::{validate_fastest_lap_range, validate_qualifying_range, validate_range},
        OptionsModel, RaceOptions,
    },
};

impl StatsService {
    pub fn race_count_per_season(&self, options: &OptionsModel) -> Result<Vec<SeasonRacesModel>> {
        let range = self.checked_range("race count", options, validate_range)?;
        self.aggregator().race_count_per_season(&range)
    }

    pub fn hat_tricks(&self, options: &OptionsModel) -> Result<Vec<HatTrickModel>> {
        let range = self.checked_range("hat tricks", options, validate_fastest_lap_range)?;
        let mut tricks = self.aggregator().hat_tricks(&range)?;
        rank_desc_by(&mut tricks, |t| t.hat_trick_count);
        Ok(tricks)
    }

    pub fn grand_slams(&self, options: &OptionsModel) -> Result<Vec<GrandSlamModel>> {
        let range = self.checked_range("grand slams", options, validate_fastest_lap_range)?;
        let mut slams = self.aggregator().grand_slams(&range)?;
        rank_desc_by(&mut slams, |s| s.grand_slam_count);
        Ok(slams)
    }

    pub fn non_finishers(&self, options: &OptionsModel) -> Result<Vec<DidNotFinishModel>> {
        let range = self.checked_range("non finishers", options, validate_range)?;
        let mut dnfs = self.aggregator().non_finishers(&range)?;
        rank_desc_by(&mut dnfs, |d| d.total_did_not_finish_count);
        Ok(dnfs)
    }

    pub fn season_position_changes(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SeasonPositionChangesModel>> {
        let range = self.checked_range("position changes", options, validate_range)?;
        let mut seasons = self.aggregator().season_position_changes(&range)?;
        for season in &mut seasons {
            rank_desc_by(&mut season.position_changes, |c| c.total_position_change);
        }
        Ok(seasons)
    }

    pub fn constructors_front_rows(&self, options: &OptionsModel) -> Result<Vec<FrontRowModel>> {
        let range = self.checked_range("constructors front rows", options, validate_qualifying_range)?;
        let mut rows = self.aggregator().constructors_front_rows(&range)?;
        rank_desc_by(&mut rows, |r| r.total_front_row_count);
        Ok(rows)
    }

    /// Every driver gets one entry per position from 1 to the worst position
    /// anyone finished in, empty where they never finished there.
    pub fn drivers_finishing_positions(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<DriverFinishingPositionsModel>> {
        let range = self.checked_range("drivers finishing positions", options, validate_range)?;
        let mut drivers = self.aggregator().drivers_finishing_positions(&range)?;
        pad_finishing_positions(&mut drivers);
        Ok(drivers)
    }

    pub fn position_changes_during_race(
        &self,
        options: &RaceOptions,
    ) -> Result<Vec<RacePositionChangesModel>> {
        self.checked_race("position changes during race", options)?;
        let mut drivers = self
            .aggregator()
            .position_changes_during_race(options.season, options.race)?;
        for driver in &mut drivers {
            driver.laps.sort_by_key(|l| l.lap_number);
        }
        Ok(drivers)
    }

    /// Each driver's lap times, fastest first.
    pub fn lap_times(&self, options: &RaceOptions) -> Result<Vec<LapTimesModel>> {
        self.checked_race("lap times", options)?;
        let mut drivers = self.aggregator().lap_times(options.season, options.race)?;
        for driver in &mut drivers {
            driver.timings.sort_by(f64::total_cmp);
        }
        Ok(drivers)
    }
}

fn pad_finishing_positions(drivers: &mut [DriverFinishingPositionsModel]) {
    let worst = drivers
        .iter()
        .flat_map(|d| d.finishing_positions.iter().map(|p| p.finishing_position))
        .max()
        .unwrap_or(0);

    for driver in drivers {
        let mut finished = std::mem::take(&mut driver.finishing_positions).into_iter().peekable();
        driver.finishing_positions = (1..=worst)
            .map(|position| match finished.next_if(|p| p.finishing_position == position) {
                Some(existing) => existing,
                None => FinishingPositionModel::empty(position),
            })
            .collect();
    }
}

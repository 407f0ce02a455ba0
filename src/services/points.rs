use super::{rank_desc_by_points, StatsService};
use crate::{
    error::Result,
    models::{SeasonPointsModel, SeasonStandingsChangesModel, SeasonWinnersPointsModel},
    options::{validator::validate_range, OptionsModel},
};

impl StatsService {
    pub fn drivers_points(&self, options: &OptionsModel) -> Result<Vec<SeasonPointsModel>> {
        let range = self.checked_range("drivers points", options, validate_range)?;
        let mut seasons = self.aggregator().drivers_points(&range)?;
        rank_scored_points(&mut seasons);
        Ok(seasons)
    }

    pub fn constructors_points(&self, options: &OptionsModel) -> Result<Vec<SeasonPointsModel>> {
        let range = self.checked_range("constructors points", options, validate_range)?;
        let mut seasons = self.aggregator().constructors_points(&range)?;
        rank_scored_points(&mut seasons);
        Ok(seasons)
    }

    pub fn drivers_champions_points(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SeasonWinnersPointsModel>> {
        let range = self.checked_range("drivers champions points", options, validate_range)?;
        self.aggregator().drivers_champions_points(&range)
    }

    pub fn constructors_champions_points(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SeasonWinnersPointsModel>> {
        let range = self.checked_range("constructors champions points", options, validate_range)?;
        self.aggregator().constructors_champions_points(&range)
    }

    pub fn drivers_standings_changes(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SeasonStandingsChangesModel>> {
        let range = self.checked_range("drivers standings changes", options, validate_range)?;
        let mut seasons = self.aggregator().drivers_standings_changes(&range)?;
        order_rounds(&mut seasons);
        Ok(seasons)
    }

    pub fn constructors_standings_changes(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SeasonStandingsChangesModel>> {
        let range = self.checked_range("constructors standings changes", options, validate_range)?;
        let mut seasons = self.aggregator().constructors_standings_changes(&range)?;
        order_rounds(&mut seasons);
        Ok(seasons)
    }
}

fn rank_scored_points(seasons: &mut [SeasonPointsModel]) {
    for season in seasons {
        rank_desc_by_points(&mut season.scored_points, |p| p.points);
    }
}

fn order_rounds(seasons: &mut [SeasonStandingsChangesModel]) {
    for standing in seasons.iter_mut().flat_map(|s| s.standings.iter_mut()) {
        standing.rounds.sort_by_key(|r| r.round);
    }
}

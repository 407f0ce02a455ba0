use super::{rank_desc_by, StatsService};
use crate::{
    error::Result,
    models::{
        AverageWinsModel, CircuitWinsModel, UniqueSeasonWinnersModel, WinnersFromPoleModel,
        WinsByGridPositionModel, WinsModel,
    },
    options::{validator::validate_range, OptionsModel},
};

impl StatsService {
    pub fn drivers_wins(&self, options: &OptionsModel) -> Result<Vec<WinsModel>> {
        let range = self.checked_range("drivers wins", options, validate_range)?;
        let mut wins = self.aggregator().drivers_wins(&range)?;
        rank_desc_by(&mut wins, |w| w.total_win_count);
        Ok(wins)
    }

    pub fn constructors_wins(&self, options: &OptionsModel) -> Result<Vec<WinsModel>> {
        let range = self.checked_range("constructors wins", options, validate_range)?;
        let mut wins = self.aggregator().constructors_wins(&range)?;
        rank_desc_by(&mut wins, |w| w.total_win_count);
        Ok(wins)
    }

    pub fn drivers_win_percent(&self, options: &OptionsModel) -> Result<Vec<AverageWinsModel>> {
        let range = self.checked_range("drivers win percent", options, validate_range)?;
        let mut wins = self.aggregator().drivers_win_percent(&range)?;
        rank_desc_by(&mut wins, |w| w.win_count);
        Ok(wins)
    }

    pub fn constructors_win_percent(&self, options: &OptionsModel) -> Result<Vec<AverageWinsModel>> {
        let range = self.checked_range("constructors win percent", options, validate_range)?;
        let mut wins = self.aggregator().constructors_win_percent(&range)?;
        rank_desc_by(&mut wins, |w| w.win_count);
        Ok(wins)
    }

    /// Circuits stay in name order; each circuit's drivers are ranked by wins.
    pub fn circuit_winners(&self, options: &OptionsModel) -> Result<Vec<CircuitWinsModel>> {
        let range = self.checked_range("circuit winners", options, validate_range)?;
        let mut circuits = self.aggregator().circuit_winners(&range)?;
        for circuit in &mut circuits {
            rank_desc_by(&mut circuit.winners, |w| w.win_count);
        }
        Ok(circuits)
    }

    pub fn unique_season_driver_winners(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonWinnersModel>> {
        let range = self.checked_range("unique driver winners", options, validate_range)?;
        self.aggregator().unique_season_driver_winners(&range)
    }

    pub fn unique_season_constructor_winners(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<UniqueSeasonWinnersModel>> {
        let range = self.checked_range("unique constructor winners", options, validate_range)?;
        self.aggregator().unique_season_constructor_winners(&range)
    }

    pub fn winners_from_pole(&self, options: &OptionsModel) -> Result<Vec<WinnersFromPoleModel>> {
        let range = self.checked_range("winners from pole", options, validate_range)?;
        self.aggregator().winners_from_pole(&range)
    }

    pub fn winners_by_grid_position(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<WinsByGridPositionModel>> {
        let range = self.checked_range("wins by grid position", options, validate_range)?;
        let mut grid = self.aggregator().winners_by_grid_position(&range)?;
        rank_desc_by(&mut grid, |g| g.win_count);
        Ok(grid)
    }
}

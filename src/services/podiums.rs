use super::{rank_desc_by, StatsService};
use crate::{
    error::Result,
    models::{PodiumsModel, SamePodiumsModel},
    options::{validator::validate_range, OptionsModel},
};

impl StatsService {
    pub fn drivers_podiums(&self, options: &OptionsModel) -> Result<Vec<PodiumsModel>> {
        let range = self.checked_range("drivers podiums", options, validate_range)?;
        let mut podiums = self.aggregator().drivers_podiums(&range)?;
        rank_desc_by(&mut podiums, |p| p.total_podium_count);
        Ok(podiums)
    }

    pub fn constructors_podiums(&self, options: &OptionsModel) -> Result<Vec<PodiumsModel>> {
        let range = self.checked_range("constructors podiums", options, validate_range)?;
        let mut podiums = self.aggregator().constructors_podiums(&range)?;
        rank_desc_by(&mut podiums, |p| p.total_podium_count);
        Ok(podiums)
    }

    pub fn same_drivers_podiums(&self, options: &OptionsModel) -> Result<Vec<SamePodiumsModel>> {
        let range = self.checked_range("same drivers podiums", options, validate_range)?;
        let mut podiums = self.aggregator().same_drivers_podiums(&range)?;
        rank_desc_by(&mut podiums, |p| p.same_podium_count);
        Ok(podiums)
    }

    pub fn same_constructors_podiums(
        &self,
        options: &OptionsModel,
    ) -> Result<Vec<SamePodiumsModel>> {
        let range = self.checked_range("same constructors podiums", options, validate_range)?;
        let mut podiums = self.aggregator().same_constructors_podiums(&range)?;
        rank_desc_by(&mut podiums, |p| p.same_podium_count);
        Ok(podiums)
    }
}

//! Report entry points: normalize and validate request options, delegate to
//! the [`Aggregator`], then apply the final ranking.
//!
//! Validation always runs before the first upstream request, so a rejected
//! range never costs a fetch. Rankings use stable sorts, so entries with equal
//! counts keep the name order the aggregator produced.

pub mod misc;
pub mod points;
pub mod podiums;
pub mod qualifying;
pub mod wins;

use std::{cmp::Reverse, sync::Arc};
use tracing::info;

use crate::{
    aggregation::Aggregator,
    ergast::RaceDataSource,
    error::Result,
    options::{validator::validate_lap_times_season, OptionsModel, RaceOptions, YearRange},
};


pub struct StatsService {
    aggregator: Aggregator,
}

impl StatsService {
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }

    pub fn from_source(source: Arc<dyn RaceDataSource>, max_parallel_fetches: usize) -> Result<Self> {
        Ok(Self::new(Aggregator::new(source, max_parallel_fetches)?))
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Normalize `options` and reject ranges `validate` refuses.
    fn checked_range<V>(&self, report: &str, options: &OptionsModel, validate: V) -> Result<YearRange>
    where
        V: Fn(&YearRange) -> Result<()>,
    {
        let range = options.normalize();
        validate(&range)?;
        info!(report, from = %range.from, to = %range.to, "Building report");
        Ok(range)
    }

    /// Single-race reports are built from lap data.
    fn checked_race(&self, report: &str, options: &RaceOptions) -> Result<()> {
        validate_lap_times_season(options.season)?;
        info!(report, season = %options.season, round = %options.race, "Building race report");
        Ok(())
    }
}

/// Stable descending sort on an integer key.
pub(crate) fn rank_desc_by<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by_key(|item| Reverse(key(item)));
}

/// Stable descending sort on a points value.
pub(crate) fn rank_desc_by_points<T, F>(items: &mut [T], points: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| points(b).total_cmp(&points(a)));
}

//! Request options accepted by every report and their normalization.
//!
//! A report request names either a single `season` or a `yearFrom`/`yearTo`
//! range. [`OptionsModel::normalize`] turns that into an inclusive
//! [`YearRange`]; the checks in [`validator`] then gate reports whose upstream
//! data only exists from a certain season onward.

pub mod time;
pub mod validator;

use serde::{Deserialize, Serialize};

pub use time::{Round, Season};

/// The first championship season the upstream API knows about.
pub const FIRST_SEASON: u16 = 1950;

/// Options payload for season-range reports.
///
/// Field names are accepted in camelCase and PascalCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsModel {
    #[serde(default, alias = "Season")]
    pub season: Option<u16>,
    #[serde(default, alias = "YearFrom")]
    pub year_from: Option<u16>,
    #[serde(default, alias = "YearTo")]
    pub year_to: Option<u16>,
}

impl OptionsModel {
    pub fn for_season(season: u16) -> Self {
        Self {
            season: Some(season),
            ..Self::default()
        }
    }

    pub fn for_range(year_from: u16, year_to: u16) -> Self {
        Self {
            season: None,
            year_from: Some(year_from),
            year_to: Some(year_to),
        }
    }

    /// Resolve the options into an inclusive range.
    ///
    /// `season` wins over the range fields. A missing `yearFrom` starts at
    /// [`FIRST_SEASON`], a missing `yearTo` collapses to `yearFrom`, and a
    /// reversed range is swapped.
    pub fn normalize(&self) -> YearRange {
        if let Some(season) = self.season {
            return YearRange::single(Season::new(season));
        }

        let from = self.year_from.unwrap_or(FIRST_SEASON);
        let to = self.year_to.unwrap_or(from);
        if from <= to {
            YearRange::new(Season::new(from), Season::new(to))
        } else {
            YearRange::new(Season::new(to), Season::new(from))
        }
    }
}

/// Options payload for single-race reports (lap charts, lap times).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceOptions {
    #[serde(alias = "Season")]
    pub season: Season,
    #[serde(alias = "Race", alias = "round")]
    pub race: Round,
}

/// Inclusive range of seasons, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: Season,
    pub to: Season,
}

impl YearRange {
    pub fn new(from: Season, to: Season) -> Self {
        Self { from, to }
    }

    pub fn single(season: Season) -> Self {
        Self::new(season, season)
    }

    pub fn seasons(&self) -> impl Iterator<Item = Season> {
        (self.from.as_u16()..=self.to.as_u16()).map(Season::new)
    }
}

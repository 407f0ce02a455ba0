//! Minimum-season checks performed before any upstream fetch.

use super::{Season, YearRange, FIRST_SEASON};
use crate::error::{Result, StatsError};

/// Fastest-lap records start with this season.
pub const FASTEST_LAP_FIRST_SEASON: u16 = 2004;

/// Full qualifying classifications start with this season.
pub const QUALIFYING_FIRST_SEASON: u16 = 2003;

/// Lap-by-lap timing data starts with this season.
pub const LAP_TIMES_FIRST_SEASON: u16 = 1996;

/// User-facing message for a season below `first_season`.
pub fn data_available_from(first_season: u16) -> String {
    format!("Duomenys prieinami nuo {} metų.", first_season)
}

fn require_from(season: Season, first_season: u16) -> Result<()> {
    if season.as_u16() < first_season {
        Err(StatsError::invalid_options(data_available_from(
            first_season,
        )))
    } else {
        Ok(())
    }
}

pub fn validate_range(range: &YearRange) -> Result<()> {
    require_from(range.from, FIRST_SEASON)
}

pub fn validate_fastest_lap_range(range: &YearRange) -> Result<()> {
    require_from(range.from, FASTEST_LAP_FIRST_SEASON)
}

pub fn validate_qualifying_range(range: &YearRange) -> Result<()> {
    require_from(range.from, QUALIFYING_FIRST_SEASON)
}

pub fn validate_lap_data_range(range: &YearRange) -> Result<()> {
    require_from(range.from, LAP_TIMES_FIRST_SEASON)
}

pub fn validate_lap_times_season(season: Season) -> Result<()> {
    require_from(season, LAP_TIMES_FIRST_SEASON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: u16, to: u16) -> YearRange {
        YearRange::new(Season::new(from), Season::new(to))
    }

    fn message(result: Result<()>) -> String {
        match result {
            Err(StatsError::InvalidOptions { message }) => message,
            other => panic!("Expected InvalidOptions, got {:?}", other),
        }
    }

    #[test]
    fn test_fastest_lap_range() {
        assert!(validate_fastest_lap_range(&range(2004, 2010)).is_ok());
        assert_eq!(
            message(validate_fastest_lap_range(&range(2003, 2010))),
            "Duomenys prieinami nuo 2004 metų."
        );
    }

    #[test]
    fn test_lap_times_season() {
        assert!(validate_lap_times_season(Season::new(1996)).is_ok());
        assert_eq!(
            message(validate_lap_times_season(Season::new(1995))),
            "Duomenys prieinami nuo 1996 metų."
        );
    }

    #[test]
    fn test_lap_data_range() {
        assert!(validate_lap_data_range(&range(1996, 2000)).is_ok());
        assert_eq!(
            message(validate_lap_data_range(&range(1990, 2000))),
            "Duomenys prieinami nuo 1996 metų."
        );
    }

    #[test]
    fn test_qualifying_range() {
        assert!(validate_qualifying_range(&range(2003, 2003)).is_ok());
        assert_eq!(
            message(validate_qualifying_range(&range(2000, 2005))),
            "Duomenys prieinami nuo 2003 metų."
        );
    }

    #[test]
    fn test_general_range() {
        assert!(validate_range(&range(1950, 1951)).is_ok());
        assert_eq!(
            message(validate_range(&range(1949, 1951))),
            "Duomenys prieinami nuo 1950 metų."
        );
    }
}
